// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The field as seen by a host form/storage framework: a field type
//! (storage columns), a widget (text input) and a formatter (display).

use super::{
    parser::{FieldSettings, RangeParser},
    sample::sample_range,
    storage::StoredRange,
    strings::*,
    ValidationErrors, IPV6_BYTES,
};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Longest textual IPv6 address.
const TEXT_LEN: usize = 39;

/// What part of the field a component provides.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Capability {
    FieldType,
    Widget,
    Formatter,
}

/// Common interface of the field components.
pub trait FieldComponent {
    /// Plugin id the host framework knows the component by.
    fn id(&self) -> &'static str;
    fn capability(&self) -> Capability;
}

/* -------------------------------------------------------------------------- */

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnKind {
    Varchar(usize),
    /// unsigned
    TinyInt,
    /// variable length binary, max bytes
    Blob(usize),
}

/// One storage column of the field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Column {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ColumnKind,
    pub indexed: bool,
    pub nullable: bool,
}

#[rustfmt::skip]
static COLUMNS: [Column; 5] = [
    Column {
        name: "ip",
        description: "The base IP address, also the start of the range",
        kind: ColumnKind::Varchar(TEXT_LEN), indexed: true, nullable: true,
    },
    Column {
        name: "ip_cidr",
        description: "The CIDR mask if the range was given with one",
        kind: ColumnKind::TinyInt, indexed: false, nullable: true,
    },
    Column {
        name: "ip_end",
        description: "The plain text end of the IP range",
        kind: ColumnKind::Varchar(TEXT_LEN), indexed: true, nullable: true,
    },
    Column {
        name: "ip_from",
        description: "The minimum IP address as a binary number",
        kind: ColumnKind::Blob(IPV6_BYTES), indexed: true, nullable: false,
    },
    Column {
        name: "ip_to",
        description: "The maximum IP address as a binary number",
        kind: ColumnKind::Blob(IPV6_BYTES), indexed: true, nullable: false,
    },
];

/// Storage side of the field.
#[derive(Clone, Copy, Debug, Default)]
pub struct IpAddressFieldType;

impl IpAddressFieldType {
    pub fn columns(&self) -> &'static [Column] {
        &COLUMNS
    }

    /// The column that holds the field's main value.
    pub fn main_property(&self) -> &'static str {
        COLUMNS[0].name
    }

    /// A record is empty when it has no base address.
    pub fn is_empty(&self, item: &StoredRange) -> bool {
        item.ip.is_empty()
    }

    /// Random, valid record for filling test content.
    pub fn sample_value<R: Rng + ?Sized>(&self, rng: &mut R) -> StoredRange {
        let item: StoredRange = StoredRange::from(sample_range(rng));
        debug!(value = %item.raw_ip(), "generated sample value");
        item
    }
}

impl FieldComponent for IpAddressFieldType {
    fn id(&self) -> &'static str {
        FIELD_TYPE_ID
    }

    fn capability(&self) -> Capability {
        Capability::FieldType
    }
}

/* -------------------------------------------------------------------------- */

/// Description of the text input a widget renders.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FormElement {
    pub title: String,
    pub description: String,
    pub default_value: String,
    pub placeholder: String,
    pub max_length: usize,
}

/// Input side of the field: validates text and converts it to storage form.
#[derive(Clone, Debug, Default)]
pub struct IpAddressWidget {
    parser: RangeParser,
}

impl IpAddressWidget {
    pub fn new(settings: FieldSettings) -> Self {
        Self {
            parser: RangeParser::new(settings),
        }
    }

    pub fn parser(&self) -> &RangeParser {
        &self.parser
    }

    /// Build the text input, prefilled with the stored value if any.
    pub fn form_element(&self, item: Option<&StoredRange>) -> FormElement {
        let settings: &FieldSettings = self.parser.settings();
        FormElement {
            title: WIDGET_TITLE.to_string(),
            description: WIDGET_DESC.to_string(),
            default_value: item.map(|i| i.raw_ip()).unwrap_or_default(),
            placeholder: settings.placeholder.clone(),
            max_length: settings.max_length,
        }
    }

    /**
    Convert submitted text to its storage record.

    ### Returns
    - `Ok(None)` for empty input.
    - `Err(errors)` if the input does not validate; nothing is stored then.
    */
    pub fn massage(&self, raw: impl AsRef<str>) -> Result<Option<StoredRange>, ValidationErrors> {
        let item: Option<StoredRange> = self.parser.parse(raw)?.map(StoredRange::from);
        if let Some(item) = &item {
            debug!(value = %item.raw_ip(), "converted input to storage form");
        }
        Ok(item)
    }

    /// [Self::massage] for every submitted value, keeping positions.
    pub fn massage_all(
        &self,
        values: &[impl AsRef<str>],
    ) -> Vec<Result<Option<StoredRange>, ValidationErrors>> {
        values.iter().map(|v| self.massage(v)).collect()
    }
}

impl FieldComponent for IpAddressWidget {
    fn id(&self) -> &'static str {
        WIDGET_ID
    }

    fn capability(&self) -> Capability {
        Capability::Widget
    }
}

/* -------------------------------------------------------------------------- */

/// Display side of the field.
#[derive(Clone, Copy, Debug, Default)]
pub struct IpAddressFormatter;

impl IpAddressFormatter {
    /// One display string per stored item.
    pub fn view_elements(&self, items: &[StoredRange]) -> Vec<String> {
        items.iter().map(StoredRange::raw_ip).collect()
    }
}

impl FieldComponent for IpAddressFormatter {
    fn id(&self) -> &'static str {
        FORMATTER_ID
    }

    fn capability(&self) -> Capability {
        Capability::Formatter
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iprange::{Notation, ValidationError};
    use rand::{rngs::StdRng, SeedableRng};

    const RANGE_V4: &str = "192.168.1.10 - 192.168.1.20";
    const CIDR_V4: &str = "127.0.0.1/24";
    const SINGLE_V4: &str = "10.0.0.1";

    #[test]
    fn test_capabilities() {
        let components: [&dyn FieldComponent; 3] =
            [&IpAddressFieldType, &IpAddressWidget::default(), &IpAddressFormatter];
        let caps: Vec<Capability> = components.iter().map(|c| c.capability()).collect();
        assert_eq!(
            caps,
            vec![Capability::FieldType, Capability::Widget, Capability::Formatter]
        );
        assert_eq!(IpAddressFieldType.id(), "ipaddress");
        assert_eq!(IpAddressWidget::default().id(), "ipaddress_default");
    }

    #[test]
    fn test_columns() {
        let ft = IpAddressFieldType;
        let names: Vec<&str> = ft.columns().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["ip", "ip_cidr", "ip_end", "ip_from", "ip_to"]);
        assert_eq!(ft.main_property(), "ip");
        let required: Vec<&str> = ft
            .columns()
            .iter()
            .filter(|c| !c.nullable)
            .map(|c| c.name)
            .collect();
        assert_eq!(required, vec!["ip_from", "ip_to"]);
        assert_eq!(ft.columns()[3].kind, ColumnKind::Blob(16));
    }

    #[test]
    fn test_is_empty() {
        let ft = IpAddressFieldType;
        assert!(ft.is_empty(&StoredRange::default()));
        let item = IpAddressWidget::default().massage(SINGLE_V4).unwrap().unwrap();
        assert!(!ft.is_empty(&item));
    }

    #[test]
    fn test_widget_massage() {
        let widget = IpAddressWidget::default();
        let item = widget.massage(RANGE_V4).unwrap().unwrap();
        assert_eq!(item.ip_from, vec![192, 168, 1, 10]);
        assert_eq!(item.ip_to, vec![192, 168, 1, 20]);
        assert_eq!(widget.massage("  "), Ok(None));
        assert!(widget.massage("nope").is_err());
    }

    #[test]
    fn test_widget_massage_all() {
        let widget = IpAddressWidget::default();
        let out = widget.massage_all(&[SINGLE_V4, "", "1.2.3.4/40"]);
        assert_eq!(out.len(), 3);
        assert!(matches!(out[0], Ok(Some(_))));
        assert_eq!(out[1], Ok(None));
        assert!(out[2].is_err());
    }

    #[test]
    fn test_widget_respects_settings() {
        let widget = IpAddressWidget::new(FieldSettings {
            allow_cidr: false,
            ..Default::default()
        });
        let errs = widget.massage(CIDR_V4).unwrap_err();
        assert_eq!(errs.first(), &ValidationError::NotationNotAllowed(Notation::Cidr));
    }

    #[test]
    fn test_form_element_default_value() {
        let widget = IpAddressWidget::default();
        let item = widget.massage(CIDR_V4).unwrap().unwrap();
        let el = widget.form_element(Some(&item));
        assert_eq!(el.default_value, CIDR_V4);
        assert_eq!(el.placeholder, "127.0.0.1/32");
        assert_eq!(el.max_length, 36);
        assert_eq!(widget.form_element(None).default_value, "");
    }

    #[test]
    fn test_formatter() {
        let widget = IpAddressWidget::default();
        let items: Vec<StoredRange> = [RANGE_V4, CIDR_V4, SINGLE_V4]
            .iter()
            .map(|s| widget.massage(s).unwrap().unwrap())
            .collect();
        assert_eq!(
            IpAddressFormatter.view_elements(&items),
            vec![RANGE_V4, CIDR_V4, SINGLE_V4]
        );
    }

    #[test]
    fn test_sample_value_is_consistent() {
        let ft = IpAddressFieldType;
        let widget = IpAddressWidget::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let item = ft.sample_value(&mut rng);
            assert!(!ft.is_empty(&item));
            let again = widget.massage(item.raw_ip()).unwrap().unwrap();
            assert_eq!(again, item);
        }
    }
}
