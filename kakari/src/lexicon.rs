//! 固定語彙テーブルの定義
//!
//! このモジュールは、チャンク分類と概念グラフ構築で参照される
//! 固定の語彙テーブル（代名詞分類表、無意味主辞集合、動詞的機能語集合など）を
//! 提供します。すべて正規化済みの原形／主成分文字列をキーとする静的な表であり、
//! 実行時には変更されません。

use crate::chunk::PronounClass;

/// 場所を指す指示代名詞
pub const DEMONSTRATIVE_LOC: &[&str] = &[
    "ここ", "そこ", "あそこ", "こっち", "そっち", "あっち", "こちら", "そちら", "あちら",
];

/// 物・人を指す指示代名詞
pub const DEMONSTRATIVE_OBJ: &[&str] = &["これ", "それ", "あれ", "こいつ", "そいつ", "あいつ"];

/// 一人称の人称代名詞
pub const PERSONAL_1ST: &[&str] = &[
    "私", "わたし", "俺", "おれ", "オレ", "僕", "ぼく", "ボク", "我ら", "我々",
];

/// 二人称の人称代名詞
pub const PERSONAL_2ND: &[&str] = &["君", "きみ", "キミ", "あなた", "貴方", "お前"];

/// 三人称の人称代名詞
pub const PERSONAL_3RD: &[&str] = &["やつ", "奴", "彼", "彼女"];

/// 不定代名詞
pub const INDEFINITE: &[&str] = &["どこ", "どれ", "どっち", "どなた", "どちら"];

/// 総称代名詞
pub const INCLUSIVE: &[&str] = &["皆", "みんな", "みな"];

/// 単独では意味を持たない主辞名詞の集合
///
/// これらを主成分とするチャンクは、子チャンクから意味を借りて
/// グラフ上で区別可能な形に書き換えられます。
pub const MEANINGLESS_HEADS: &[&str] = &[
    "前", "後", "こと", "事", "もの", "物", "者", "ため", "爲", "為", "為め", "爲め", "意", "上",
    "うえ", "中", "なか", "下", "した", "なる", "成る", "ある", "よる", "する", "ない", "無い",
    "から", "だから", "場合", "問題", "もんだい", "内容", "ないよう", "範囲",
];

/// 動詞的な機能語の集合
///
/// 機能成分がこれらを含む場合、名詞＋するのような動詞的用法とみなして
/// チャンク種別を動詞に補正します。
pub const VERB_LIKE_FUNCS: &[&str] = &["する", "しいるて", "し", "した", "しいるて・が", "いるて"];

/// 動詞的補正の対象外となる機能成分
///
/// 動詞的機能語を部分文字列として含むものの、純粋に機能語としてのみ
/// 働く機能成分はここで除外します。機能成分全体との完全一致で判定します。
pub const VERB_LIKE_EXCLUDE: &[&str] = &["として", "としては", "としても", "とした", "とし"];

/// 概念グラフに計上しない主成分の集合
///
/// 意味内容を持たない形式的な語がノード・エッジの重みを支配しないよう、
/// 計上前に除外します。
pub const UNCOUNTED: &[&str] = &["UNKNOWN", "する", "なる", "よう", "もの", "ん", "の"];

/// 否定を表す助動詞の原形
pub const NEGATION_AUXILIARIES: &[&str] = &["ん", "ない", "ぬ", "まい"];

/// 文末で疑問を表す助詞の原形
pub const QUESTION_PARTICLES: &[&str] = &["の", "なの", "か"];

/// 否定形容詞の原形
pub const NEGATION_ADJECTIVE: &str = "ない";

/// 疑問符の表層形
pub const QUESTION_MARK: &str = "？";

/// 主成分が無意味主辞集合に含まれるかを判定します
#[inline(always)]
pub fn is_meaningless_head(main: &str) -> bool {
    MEANINGLESS_HEADS.contains(&main)
}

/// 主成分が計上対象外かを判定します
#[inline(always)]
pub fn is_uncounted(main: &str) -> bool {
    UNCOUNTED.contains(&main)
}

/// 代名詞の原形を代名詞分類に振り分けます
///
/// 分類表を固定の優先順位（場所指示 → 物指示 → 一人称 → 二人称 → 三人称 →
/// 不定 → 総称）で調べ、最初に一致した分類を返します。
///
/// # 引数
///
/// * `lemma` - 代名詞の原形
///
/// # 戻り値
///
/// 一致した場合は `Some(PronounClass)`、どの表にもない場合は `None`
pub fn classify_pronoun(lemma: &str) -> Option<PronounClass> {
    let tables: &[(&[&str], PronounClass)] = &[
        (DEMONSTRATIVE_LOC, PronounClass::DemonstrativeLoc),
        (DEMONSTRATIVE_OBJ, PronounClass::DemonstrativeObj),
        (PERSONAL_1ST, PronounClass::Personal1st),
        (PERSONAL_2ND, PronounClass::Personal2nd),
        (PERSONAL_3RD, PronounClass::Personal3rd),
        (INDEFINITE, PronounClass::Indefinite),
        (INCLUSIVE, PronounClass::Inclusive),
    ];
    for (table, class) in tables {
        if table.contains(&lemma) {
            return Some(*class);
        }
    }
    None
}
