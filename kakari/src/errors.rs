//! エラー型の定義
//!
//! このモジュールは、kakariライブラリで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt::{self, Debug};

/// kakari専用のResult型
///
/// エラー型としてデフォルトで[`KakariError`]を使用します。
pub type Result<T, E = KakariError> = std::result::Result<T, E>;

/// kakariのエラー型
///
/// このライブラリで発生する可能性のあるすべてのエラーを表現します。
/// 各バリアントは特定のエラー条件に対応しています。
#[derive(Debug, thiserror::Error)]
pub enum KakariError {
    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 整数パースエラー
    ///
    /// [`ParseIntError`](std::num::ParseIntError)のエラーバリアント。
    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),

    /// I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl KakariError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_via_question_mark() {
        fn open_missing() -> Result<std::fs::File> {
            Ok(std::fs::File::open("/nonexistent/kakari")?)
        }
        assert!(matches!(open_missing(), Err(KakariError::Io(_))));
    }
}
