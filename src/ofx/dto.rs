use serde::{Deserialize, Serialize};

use crate::types::NormalizedTransaction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "OFX")]
pub struct OfxDocument {
    #[serde(rename = "SIGNONMSGSRSV1")]
    pub signon_msgs: SignonMsgsRsV1,
    #[serde(rename = "BANKMSGSRSV1")]
    pub bank_msgs: BankMsgsRsV1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignonMsgsRsV1 {
    #[serde(rename = "SONRS")]
    pub son_rs: SonRs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SonRs {
    #[serde(rename = "STATUS")]
    pub status: Status,
    #[serde(rename = "DTSERVER")]
    pub dt_server: String,
    #[serde(rename = "LANGUAGE")]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(rename = "CODE")]
    pub code: u32,
    #[serde(rename = "SEVERITY")]
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankMsgsRsV1 {
    #[serde(rename = "STMTTRNRS")]
    pub stmt_trn_rs: StmtTrnRs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StmtTrnRs {
    #[serde(rename = "TRNUID")]
    pub trn_uid: String,
    #[serde(rename = "STATUS")]
    pub status: Status,
    #[serde(rename = "STMTRS")]
    pub stmt_rs: StmtRs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StmtRs {
    #[serde(rename = "CURDEF")]
    pub currency: String,
    #[serde(rename = "BANKTRANLIST")]
    pub bank_transaction_list: BankTranList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankTranList {
    #[serde(rename = "STMTTRN", default)]
    pub transactions: Vec<StmtTrn>,
}

/// A single `STMTTRN` node. Leaf values are kept as the text that ends up in
/// the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StmtTrn {
    #[serde(rename = "TRNTYPE")]
    pub trn_type: String,
    #[serde(rename = "DTPOSTED")]
    pub dt_posted: String,
    #[serde(rename = "TRNAMT")]
    pub amount: String,
    #[serde(rename = "FITID")]
    pub fitid: String,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "MEMO")]
    pub memo: String,
}

impl Status {
    pub fn info() -> Self {
        Status {
            code: 0,
            severity: "INFO".to_string(),
        }
    }
}

impl From<&NormalizedTransaction> for StmtTrn {
    fn from(txn: &NormalizedTransaction) -> Self {
        StmtTrn {
            trn_type: txn.kind.as_str().to_string(),
            dt_posted: txn.posted_date.clone(),
            amount: txn.amount.to_string(),
            fitid: txn.id.clone(),
            name: txn.payee.clone(),
            memo: txn.memo.clone(),
        }
    }
}
