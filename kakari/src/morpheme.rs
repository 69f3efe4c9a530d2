//! 形態素レコードの定義
//!
//! このモジュールは、外部係り受け解析器が出力する1形態素分の情報
//! （表層形・原形・文法ラベル列）を保持する不変のレコード型と、
//! 主品詞カラムの分類を提供します。

/// 1つの形態素を表す不変のレコード
///
/// 表層形、原形、および最大5個の文法ラベルを保持します。
/// 生成後は変更されず、ちょうど1つのチャンクに所有されます。
#[derive(Clone, Debug)]
pub struct MorphemeRecord {
    surface: String,
    lemma: String,
    labels: Vec<String>,
}

impl MorphemeRecord {
    /// 新しいインスタンスを作成します。
    ///
    /// # 引数
    ///
    /// * `surface` - 表層形
    /// * `lemma` - 原形
    /// * `labels` - 文法ラベル列（最大5個）
    pub fn new<S, L>(surface: S, lemma: S, labels: L) -> Self
    where
        S: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            surface: surface.into(),
            lemma: lemma.into(),
            labels: labels.into_iter().take(5).map(Into::into).collect(),
        }
    }

    /// 表層形を返します。
    #[inline(always)]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// 原形を返します。
    #[inline(always)]
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// `i`番目の文法ラベルを返します。
    ///
    /// 存在しない位置には解析器の空欄プレースホルダ `*` を返します。
    #[inline(always)]
    pub fn label(&self, i: usize) -> &str {
        self.labels.get(i).map_or("*", String::as_str)
    }

    /// 先頭の文法ラベル（品詞細分類1）を返します。
    #[inline(always)]
    pub fn first_label(&self) -> &str {
        self.label(0)
    }
}

/// 外部解析器の主品詞カラムの分類
///
/// チャンクへの蓄積時に形態素を振り分ける11の文法カテゴリと、
/// 分類対象外を表す[`Other`](Self::Other)からなります。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PartOfSpeech {
    /// 名詞
    Noun,
    /// 動詞
    Verb,
    /// 形容詞
    Adjective,
    /// 助詞
    Postposition,
    /// 助動詞
    AuxiliaryVerb,
    /// 接続詞
    Conjunction,
    /// 感動詞
    Interjection,
    /// 記号
    Sign,
    /// 副詞
    Adverb,
    /// 連体詞
    Adnominal,
    /// 接頭詞
    Prefix,
    /// 分類対象外
    Other,
}

impl PartOfSpeech {
    /// 主品詞カラムの文字列を分類します。
    ///
    /// # 引数
    ///
    /// * `label` - 主品詞カラムの文字列
    ///
    /// # 戻り値
    ///
    /// 対応する分類。未知の品詞は[`Other`](Self::Other)になります。
    pub fn from_label(label: &str) -> Self {
        match label {
            "名詞" => Self::Noun,
            "動詞" => Self::Verb,
            "形容詞" => Self::Adjective,
            "助詞" => Self::Postposition,
            "助動詞" => Self::AuxiliaryVerb,
            "接続詞" => Self::Conjunction,
            "感動詞" => Self::Interjection,
            "記号" => Self::Sign,
            "副詞" => Self::Adverb,
            "連体詞" => Self::Adnominal,
            "接頭詞" => Self::Prefix,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_padded_with_placeholder() {
        let m = MorphemeRecord::new("猫", "猫", ["一般", "*"]);
        assert_eq!(m.first_label(), "一般");
        assert_eq!(m.label(1), "*");
        assert_eq!(m.label(4), "*");
    }

    #[test]
    fn test_part_of_speech_from_label() {
        assert_eq!(PartOfSpeech::from_label("名詞"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::from_label("接頭詞"), PartOfSpeech::Prefix);
        assert_eq!(PartOfSpeech::from_label("フィラー"), PartOfSpeech::Other);
    }
}
