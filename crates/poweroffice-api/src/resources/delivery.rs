use std::fmt;

use serde::Serialize;

use crate::client::ApiClient;

/// How an outgoing invoice reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
#[repr(u8)]
pub enum InvoiceDeliveryType {
    /// Reported on errors only; never a valid choice.
    None = 0,
    PdfByEmail = 1,
    Print = 2,
    Ehf = 3,
    AvtaleGiro = 4,
    External = 5,
}

impl InvoiceDeliveryType {
    pub const ALL: [InvoiceDeliveryType; 6] = [
        InvoiceDeliveryType::None,
        InvoiceDeliveryType::PdfByEmail,
        InvoiceDeliveryType::Print,
        InvoiceDeliveryType::Ehf,
        InvoiceDeliveryType::AvtaleGiro,
        InvoiceDeliveryType::External,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            InvoiceDeliveryType::None => "None",
            InvoiceDeliveryType::PdfByEmail => "PdfByEmail",
            InvoiceDeliveryType::Print => "Print",
            InvoiceDeliveryType::Ehf => "EHF",
            InvoiceDeliveryType::AvtaleGiro => "AvtaleGiro",
            InvoiceDeliveryType::External => "External",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            InvoiceDeliveryType::None => "No delivery type - error report value only",
            InvoiceDeliveryType::PdfByEmail => {
                "Invoice will be delivered as email with PDF as attachment"
            }
            InvoiceDeliveryType::Print => "Invoice will be printed",
            InvoiceDeliveryType::Ehf => "Invoice will be delivered over EHF",
            InvoiceDeliveryType::AvtaleGiro => "Invoice will be delivered over AvtaleGiro",
            InvoiceDeliveryType::External => {
                "Invoice will be delivered over an external third party integration"
            }
        }
    }
}

impl From<InvoiceDeliveryType> for u8 {
    fn from(kind: InvoiceDeliveryType) -> u8 {
        kind.code()
    }
}

impl fmt::Display for InvoiceDeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ApiClient {
    /// The delivery types the API accepts. Static; makes no request.
    pub fn invoice_delivery_types(&self) -> &'static [InvoiceDeliveryType] {
        &InvoiceDeliveryType::ALL
    }
}
