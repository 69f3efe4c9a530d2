//! 内部ユーティリティ関数
//!
//! 主成分文字列の正規化、文分割、部分文字列の除去など、
//! 複数のモジュールから使われる補助関数を提供します。

use std::sync::OnceLock;

use regex::Regex;

/// 文の区切りを抽出する正規表現
fn sentence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^　！？。]*[！？。]|[^　！？。]+").unwrap())
}

/// 確定済みの主成分から付加タグを取り除き、素の語形に戻します
///
/// 分類・補正パスが付加する `(...)` グループ、`[...]` グループ、改行を
/// すべて取り除きます。補正パスが語彙テーブルと照合する際の正規化に
/// 使われます。
///
/// # 引数
///
/// * `main` - 確定済みの主成分文字列
///
/// # 戻り値
///
/// タグを除いた素の語形
pub fn normalize_main(main: &str) -> String {
    let mut out = String::with_capacity(main.len());
    let mut depth_paren = 0usize;
    let mut depth_bracket = 0usize;
    for c in main.chars() {
        match c {
            '(' => depth_paren += 1,
            ')' => depth_paren = depth_paren.saturating_sub(1),
            '[' => depth_bracket += 1,
            ']' => depth_bracket = depth_bracket.saturating_sub(1),
            '\n' => {}
            _ if depth_paren == 0 && depth_bracket == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// 連続したテキストを個々の文に分割します
///
/// 句点・感嘆符・疑問符（。！？）で区切り、空要素を除いたうえで
/// 各文の前後の空白を取り除きます。表層形がチャンクヘッダのマーカーと
/// 衝突しないよう、`*` は `-` に置き換えます。外部解析器に文単位で
/// 入力を与える呼び出し側のための補助です。
///
/// # 引数
///
/// * `text` - 分割対象のテキスト
///
/// # 戻り値
///
/// 文のリスト
pub fn split_sentences(text: &str) -> Vec<String> {
    sentence_regex()
        .find_iter(text)
        .map(|m| m.as_str().trim().replace('*', "-"))
        .filter(|s| !s.is_empty())
        .collect()
}

/// 最初に現れる `needle` だけを `haystack` から取り除きます
///
/// `needle` が空、または見つからない場合は `haystack` をそのまま返します。
pub(crate) fn remove_first(haystack: &str, needle: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }
    match haystack.find(needle) {
        Some(at) => {
            let mut out = String::with_capacity(haystack.len() - needle.len());
            out.push_str(&haystack[..at]);
            out.push_str(&haystack[at + needle.len()..]);
            out
        }
        None => haystack.to_string(),
    }
}
