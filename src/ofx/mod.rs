mod document;
mod dto;

pub use document::build_document;
pub use dto::{
    BankMsgsRsV1, BankTranList, OfxDocument, SignonMsgsRsV1, SonRs, Status, StmtRs, StmtTrn,
    StmtTrnRs,
};
