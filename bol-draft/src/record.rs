//! The shipment record carried by a single render request.
//!
//! Every field is an optional string on the wire. Absent keys and JSON
//! `null` both collapse to an empty string, so code downstream of
//! deserialization can always assume all 21 fields are present.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

macro_rules! shipment_fields {
    ($($(#[$doc:meta])* $field:ident => $variant:ident,)+) => {
        /// Flat, 21-field description of one bill-of-lading draft
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct ShipmentRecord {
            $(
                $(#[$doc])*
                #[serde(deserialize_with = "nullable_string")]
                pub $field: String,
            )+
        }

        /// Names one of the [`ShipmentRecord`] fields
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Field {
            $($variant,)+
        }

        impl Field {
            /// All fields in declaration order
            pub const ALL: [Field; FIELD_COUNT] = [$(Field::$variant,)+];

            /// JSON key of the field
            pub fn name(self) -> &'static str {
                match self {
                    $(Field::$variant => stringify!($field),)+
                }
            }
        }

        impl ShipmentRecord {
            /// Returns the value stored for `field`
            pub fn get(&self, field: Field) -> &str {
                match field {
                    $(Field::$variant => &self.$field,)+
                }
            }

            /// Returns a mutable handle to the value stored for `field`
            pub fn get_mut(&mut self, field: Field) -> &mut String {
                match field {
                    $(Field::$variant => &mut self.$field,)+
                }
            }
        }
    };
}

/// Number of fields in a [`ShipmentRecord`]
pub const FIELD_COUNT: usize = 21;

shipment_fields! {
    /// Exporter name and address
    shipper => Shipper,
    /// Importer name and address
    consignee => Consignee,
    notify_party => NotifyParty,
    /// Draft B/L reference number
    draft_bill_of_lading => DraftBillOfLading,
    place_of_receipt => PlaceOfReceipt,
    place_of_delivery => PlaceOfDelivery,
    vessel_and_voyage => VesselAndVoyage,
    port_of_loading => PortOfLoading,
    port_of_discharge => PortOfDischarge,
    marks_numbers => MarksNumbers,
    /// Free-text description of packages and goods
    packages_description => PackagesDescription,
    gross_weight => GrossWeight,
    measurement => Measurement,
    /// Customs seal number
    cseal_no => CsealNo,
    /// Shipping line seal number
    sline_seal_no => SlineSealNo,
    invoice_no => InvoiceNo,
    /// Invoice date
    dtd => Dtd,
    /// Shipping bill date
    dt => Dt,
    shipping_bill_no => ShippingBillNo,
    net_weight => NetWeight,
    no_of_originals => NoOfOriginals,
}

impl ShipmentRecord {
    /// Iterates `(field, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// True when no field carries any text
    pub fn is_blank(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
