//! チャンク（文節）の最終レコードと付随する列挙型の定義
//!
//! このモジュールは、分類が完了したチャンクを表す[`Chunk`]と、
//! その意味的・統語的な素性を表す列挙型を提供します。
//! 分類途中の蓄積状態は[`builder::ChunkBuilder`]が保持し、
//! 確定時に消費されて[`Chunk`]になります。

pub mod builder;

/// チャンクの粗い統語種別
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChunkType {
    /// 未分類
    Unknown,
    /// 名詞
    Noun,
    /// 形容詞
    Adjective,
    /// 動詞
    Verb,
    /// 接続詞
    Conjunction,
    /// 感動詞
    Interjection,
    /// 副詞
    Adverb,
    /// 連体詞
    Adnominal,
}

/// 名詞の動詞化・形容詞化などで付与される第2種別
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SecondaryType {
    /// 名詞
    Noun,
    /// 形容詞
    Adjective,
    /// 動詞
    Verb,
}

/// 否定の状態
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Negation {
    /// 否定なし
    #[default]
    None,
    /// 否定
    Negative,
    /// 二重否定（強い肯定）
    DoubleNegative,
}

/// 時制
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Tense {
    /// 時制なしまたは現在
    #[default]
    None,
    /// 過去
    Past,
    /// 現在進行
    PresentContinuous,
}

/// 固有表現の分類
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NamedEntity {
    /// 固有表現なし（または不明）
    #[default]
    None,
    /// 人名
    Person,
    /// 地名
    Location,
    /// 組織名
    Organization,
    /// 数
    Number,
    /// 一般
    General,
}

/// 代名詞の分類
///
/// [`Omitted`](Self::Omitted)は分類器自身が付与することはなく、
/// 下流の照応解析が省略された主語を補うために予約されています。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PronounClass {
    /// 場所指示
    DemonstrativeLoc,
    /// 物・人指示
    DemonstrativeObj,
    /// 一人称
    Personal1st,
    /// 二人称
    Personal2nd,
    /// 三人称
    Personal3rd,
    /// 不定
    Indefinite,
    /// 総称
    Inclusive,
    /// 省略された主語
    Omitted,
}

/// 過去時制を表す主成分タグ
pub const TAG_PAST: &str = "\n(過去)";

/// 現在進行を表す主成分タグ
pub const TAG_PRESENT_CONTINUOUS: &str = "\n(現在)";

/// 使役を表す主成分タグ
pub const TAG_COMPULSORY: &str = "\n(強制)";

/// 受動を表す主成分タグ
pub const TAG_PASSIVE: &str = "\n(被動)";

/// 疑問を表す主成分タグ
pub const TAG_QUESTION: &str = "\n(質問)";

/// 否定を表す主成分タグ
pub const TAG_NEGATIVE: &str = "\n(否定)";

/// 二重否定を表す主成分タグ
pub const TAG_DOUBLE_NEGATIVE: &str = "\n(二重否定)";

/// 原形が得られなかった分類枝で使われる番兵の主成分
pub const UNKNOWN_MAIN: &str = "UNKNOWN";

/// 解析器が原形を出力できなかったことを示すプレースホルダ文字
pub(crate) const NO_LEMMA_PLACEHOLDER: char = '*';

/// 分類が完了したチャンク（文節）
///
/// 外部解析器が付与した親チャンクidと、分類器が導出した意味的・統語的
/// 素性を保持します。`main`と`main_surface`は分類時にちょうど一度
/// 設定され、その後は木レベルの補正パス（無意味主辞の置換・否定スコープの
/// 伝播）によってのみ書き換えられます。補正後は読み取り専用です。
#[derive(Clone, Debug)]
pub struct Chunk {
    /// チャンクid（ブロック内で0始まり）
    pub id: usize,

    /// 親チャンクid（-1は根）
    pub parent: i32,

    /// 意味的な主成分。グラフのノードキーとして使われます
    pub main: String,

    /// 主成分の表層形
    pub main_surface: String,

    /// 機能成分。表層形から主成分の表層形を除いたもの
    pub func: String,

    /// チャンク全体の元の表層形
    pub surface: String,

    /// チャンク表層形の読み
    pub yomi: String,

    /// 統語種別
    pub chunk_type: ChunkType,

    /// 名詞の動詞化などで付与される第2種別
    pub chunk_type2: Option<SecondaryType>,

    /// 否定の状態
    pub negation: Negation,

    /// 受動かどうか
    pub passive: bool,

    /// 使役かどうか
    pub compulsory: bool,

    /// 疑問かどうか
    pub question: bool,

    /// 時制
    pub tense: Tense,

    /// 固有表現の分類
    pub named_entity: NamedEntity,

    /// 代名詞の分類
    pub pronoun: Option<PronounClass>,

    /// 文書内でこの代名詞が何番目に現れたかを示す序数
    pub pronoun_rank: u32,

    /// 主成分が無意味主辞だった場合に、意味を担う子チャンクの主成分が入ります
    pub meaning: String,

    /// 子チャンクidのリスト。木の組み立て時に親ポインタの逆写像として導出されます
    pub children: Vec<usize>,
}

impl Chunk {
    /// このチャンクが根（親を持たない）かどうかを返します。
    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.parent == -1
    }
}
