use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;
use xml::{EmitterConfig, EventReader};

use super::dto::{
    BankMsgsRsV1, BankTranList, OfxDocument, SignonMsgsRsV1, SonRs, Status, StmtRs, StmtTrn,
    StmtTrnRs,
};
use crate::{
    errors::{ConvertError, ConvertResult},
    types::NormalizedTransaction,
};

const LANGUAGE: &str = "ENG";
const CURRENCY: &str = "EUR";
const TRANSACTION_UID: &str = "1001";

impl OfxDocument {
    /// Empty statement with the signon and bank message headers filled in.
    pub fn new(now: DateTime<Utc>) -> Self {
        OfxDocument {
            signon_msgs: SignonMsgsRsV1 {
                son_rs: SonRs {
                    status: Status::info(),
                    dt_server: now.to_rfc3339_opts(SecondsFormat::Millis, true),
                    language: LANGUAGE.to_string(),
                },
            },
            bank_msgs: BankMsgsRsV1 {
                stmt_trn_rs: StmtTrnRs {
                    trn_uid: TRANSACTION_UID.to_string(),
                    status: Status::info(),
                    stmt_rs: StmtRs {
                        currency: CURRENCY.to_string(),
                        bank_transaction_list: BankTranList::default(),
                    },
                },
            },
        }
    }

    /// Appends a `STMTTRN` node after the ones already present.
    pub fn push(&mut self, transaction: &NormalizedTransaction) {
        self.transactions_mut().push(StmtTrn::from(transaction));
    }

    pub fn transactions(&self) -> &[StmtTrn] {
        &self
            .bank_msgs
            .stmt_trn_rs
            .stmt_rs
            .bank_transaction_list
            .transactions
    }

    fn transactions_mut(&mut self) -> &mut Vec<StmtTrn> {
        &mut self
            .bank_msgs
            .stmt_trn_rs
            .stmt_rs
            .bank_transaction_list
            .transactions
    }

    /// Serializes the document as indented XML with an XML declaration.
    pub fn to_xml(&self) -> ConvertResult<String> {
        let compact = serde_xml_rs::to_string(self)
            .map_err(|e| ConvertError::SerializeFailed(e.to_string()))?;
        indent(&compact)
    }
}

/// Builds the statement, one `STMTTRN` per transaction in the given order.
pub fn build_document(transactions: &[NormalizedTransaction], now: DateTime<Utc>) -> OfxDocument {
    let mut document = OfxDocument::new(now);
    for transaction in transactions {
        document.push(transaction);
    }
    debug!(count = transactions.len(), "assembled OFX statement");
    document
}

fn indent(xml: &str) -> ConvertResult<String> {
    let mut output = Vec::new();
    {
        let mut writer = EmitterConfig::new()
            .perform_indent(true)
            .create_writer(&mut output);

        for event in EventReader::new(xml.as_bytes()) {
            let event = event.map_err(|e| ConvertError::SerializeFailed(e.to_string()))?;
            if let Some(event) = event.as_writer_event() {
                writer
                    .write(event)
                    .map_err(|e| ConvertError::SerializeFailed(e.to_string()))?;
            }
        }
    }

    String::from_utf8(output).map_err(|e| ConvertError::SerializeFailed(e.to_string()))
}
