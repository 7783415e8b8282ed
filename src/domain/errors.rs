#![allow(dead_code)]

/// カタログ登録のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// タイトルが空
    BlankTitle,
    /// 会員名が空
    BlankName,
}

/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueItemError {
    /// 指定された資料に貸出可能な登録番号がない
    NoIssuableRecord,
    /// 登録番号の資料IDが要求された資料と一致しない
    ItemMismatch,
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnItemError {
    /// 既に返却済み
    AlreadyReturned,
}
