//! チャンク分類器
//!
//! このモジュールは、形態素を文法カテゴリ別に蓄積し、優先順位付きの
//! 規則カスケードで主成分・機能成分・統語種別・素性を導出するビルダーを
//! 提供します。ビルダーは確定時に消費され、蓄積リストは破棄されて
//! 導出済みフィールドだけが[`Chunk`]として残ります。

use crate::chunk::{
    Chunk, ChunkType, NamedEntity, Negation, PronounClass, SecondaryType, Tense, NO_LEMMA_PLACEHOLDER,
    TAG_COMPULSORY, TAG_DOUBLE_NEGATIVE, TAG_NEGATIVE, TAG_PASSIVE, TAG_PAST,
    TAG_PRESENT_CONTINUOUS, TAG_QUESTION, UNKNOWN_MAIN,
};
use crate::errors::{KakariError, Result};
use crate::lexicon;
use crate::morpheme::{MorphemeRecord, PartOfSpeech};
use crate::utils::remove_first;

/// 非自立名詞を表す品詞細分類ラベル
const LABEL_DEPENDENT: &str = "非自立";

/// 接尾を表す品詞細分類ラベル
const LABEL_SUFFIX: &str = "接尾";

/// 形態素を蓄積してチャンクを分類するビルダー
///
/// 外部解析器のブロック内で1チャンク分の形態素行を[`push_row`](Self::push_row)で
/// 受け取り、[`finish`](Self::finish)で分類を実行して最終的な[`Chunk`]を
/// 生成します。カテゴリ別の蓄積リストは分類の中間証拠であり、確定後には
/// 残りません。
#[derive(Debug)]
pub struct ChunkBuilder {
    id: usize,
    parent: i32,

    surface: String,
    yomi: String,

    nouns: Vec<MorphemeRecord>,
    verbs: Vec<MorphemeRecord>,
    adjectives: Vec<MorphemeRecord>,
    postpositions: Vec<MorphemeRecord>,
    auxiliary_verbs: Vec<MorphemeRecord>,
    conjunctions: Vec<MorphemeRecord>,
    interjections: Vec<MorphemeRecord>,
    signs: Vec<MorphemeRecord>,
    adverbs: Vec<MorphemeRecord>,
    adnominals: Vec<MorphemeRecord>,
    prefixes: Vec<MorphemeRecord>,

    main: String,
    main_surface: String,
    func: String,
    chunk_type: ChunkType,
    chunk_type2: Option<SecondaryType>,
    negation: Negation,
    passive: bool,
    compulsory: bool,
    question: bool,
    tense: Tense,
    named_entity: NamedEntity,
    pronoun: Option<PronounClass>,
}

impl ChunkBuilder {
    /// 新しい空のビルダーを作成します。
    ///
    /// # 引数
    ///
    /// * `id` - チャンクid
    /// * `parent` - 親チャンクid（-1は根）
    pub fn new(id: usize, parent: i32) -> Self {
        Self {
            id,
            parent,
            surface: String::new(),
            yomi: String::new(),
            nouns: vec![],
            verbs: vec![],
            adjectives: vec![],
            postpositions: vec![],
            auxiliary_verbs: vec![],
            conjunctions: vec![],
            interjections: vec![],
            signs: vec![],
            adverbs: vec![],
            adnominals: vec![],
            prefixes: vec![],
            main: String::new(),
            main_surface: String::new(),
            func: String::new(),
            chunk_type: ChunkType::Unknown,
            chunk_type2: None,
            negation: Negation::None,
            passive: false,
            compulsory: false,
            question: false,
            tense: Tense::None,
            named_entity: NamedEntity::None,
            pronoun: None,
        }
    }

    /// 1形態素行をチャンクに追加します。
    ///
    /// カラム順は外部解析器の出力に従います:
    /// `[表層形, 主品詞, ラベル1..ラベル5, 原形, 読み?]`。
    /// 読みカラムが欠けている場合は表層形で代用します。
    ///
    /// # 引数
    ///
    /// * `fields` - 分割済みの形態素行
    ///
    /// # エラー
    ///
    /// カラム数が8未満の場合にエラーを返します。
    pub fn push_row(&mut self, fields: &[&str]) -> Result<()> {
        if fields.len() < 8 {
            return Err(KakariError::invalid_format(
                "morpheme",
                format!("expected at least 8 columns, got {}", fields.len()),
            ));
        }
        let surface = fields[0];
        let lemma = fields[7];
        self.surface.push_str(surface);
        self.yomi.push_str(fields.get(8).copied().unwrap_or(surface));

        let record = MorphemeRecord::new(surface, lemma, fields[2..7].iter().copied());
        match PartOfSpeech::from_label(fields[1]) {
            PartOfSpeech::Noun => self.nouns.push(record),
            PartOfSpeech::Verb => self.verbs.push(record),
            PartOfSpeech::Adjective => self.adjectives.push(record),
            PartOfSpeech::Postposition => self.postpositions.push(record),
            PartOfSpeech::AuxiliaryVerb => self.auxiliary_verbs.push(record),
            PartOfSpeech::Conjunction => self.conjunctions.push(record),
            PartOfSpeech::Interjection => self.interjections.push(record),
            PartOfSpeech::Sign => self.signs.push(record),
            PartOfSpeech::Adverb => self.adverbs.push(record),
            PartOfSpeech::Adnominal => self.adnominals.push(record),
            PartOfSpeech::Prefix => self.prefixes.push(record),
            PartOfSpeech::Other => {
                log::debug!("ignoring morpheme with unclassified POS {:?}: {}", fields[1], surface);
            }
        }
        Ok(())
    }

    /// チャンクを確定し、最終的な[`Chunk`]を生成します。
    ///
    /// 主成分の解決、機能成分の解決を順に実行した後、代名詞・時制・
    /// 使役・受動・疑問・否定の各タグをこの固定順で主成分に付加します。
    /// ビルダーは消費され、カテゴリ別の蓄積リストは破棄されます。
    ///
    /// # 引数
    ///
    /// * `position` - 文書内でのこのブロックの位置
    /// * `pronoun_rank` - 文書内でこれまでに見つかった代名詞の数
    pub fn finish(mut self, position: usize, pronoun_rank: u32) -> Chunk {
        self.resolve_main();
        self.resolve_func();

        let mut rank = 0;
        if self.pronoun.is_some() {
            self.main.push_str(&format!("[{}@{}]", position, pronoun_rank));
            rank = pronoun_rank;
        }
        match self.tense {
            Tense::Past => self.main.push_str(TAG_PAST),
            Tense::PresentContinuous => self.main.push_str(TAG_PRESENT_CONTINUOUS),
            Tense::None => {}
        }
        if self.compulsory {
            self.main.push_str(TAG_COMPULSORY);
        }
        if self.passive {
            self.main.push_str(TAG_PASSIVE);
        }
        if self.question {
            self.main.push_str(TAG_QUESTION);
        }
        match self.negation {
            Negation::Negative => self.main.push_str(TAG_NEGATIVE),
            Negation::DoubleNegative => self.main.push_str(TAG_DOUBLE_NEGATIVE),
            Negation::None => {}
        }

        Chunk {
            id: self.id,
            parent: self.parent,
            main: self.main,
            main_surface: self.main_surface,
            func: self.func,
            surface: self.surface,
            yomi: self.yomi,
            chunk_type: self.chunk_type,
            chunk_type2: self.chunk_type2,
            negation: self.negation,
            passive: self.passive,
            compulsory: self.compulsory,
            question: self.question,
            tense: self.tense,
            named_entity: self.named_entity,
            pronoun: self.pronoun,
            pronoun_rank: rank,
            meaning: String::new(),
            children: vec![],
        }
    }

    /// 主成分を解決します。
    ///
    /// 優先順位付きの分類枝を先頭から順に評価し、最初に成立した枝で
    /// 確定します。どの枝も成立しない場合は番兵の主成分を割り当てます。
    /// その後、接頭詞の前置と原形欠落時の表層形代用を適用します。
    fn resolve_main(&mut self) {
        // 評価順がそのまま規則の優先順位になる。
        let resolved = self.branch_independent_nouns()
            || self.branch_meaningless_noun()
            || self.branch_adjective()
            || self.branch_verb()
            || self.branch_adverb()
            || self.branch_conjunction()
            || self.branch_interjection()
            || self.branch_adnominal()
            || self.branch_postposition()
            || self.branch_auxiliary_verb()
            || self.branch_sign()
            || self.branch_dependent_noun();
        if !resolved {
            self.main = UNKNOWN_MAIN.to_string();
        }

        if !self.prefixes.is_empty() {
            let lemmas: Vec<&str> = self.prefixes.iter().map(|p| p.lemma()).collect();
            let surfaces: Vec<&str> = self.prefixes.iter().map(|p| p.surface()).collect();
            self.main = format!("{}{}", lemmas.join("\n"), self.main);
            self.main_surface = format!("{}{}", surfaces.join("\n"), self.main_surface);
        }

        // 原形が出力されなかった形態素を含む場合は表層形で代用する。
        if self.main.contains(NO_LEMMA_PLACEHOLDER) {
            self.main = self.main_surface.clone();
        }
    }

    /// 自立名詞の枝。非自立でも接尾でもない名詞が先頭にある場合に成立します。
    ///
    /// 先頭名詞の品詞細分類によってサ変接続・形容動詞語幹・固有名詞・
    /// 代名詞・数の各補正を適用します。
    fn branch_independent_nouns(&mut self) -> bool {
        let first_label = match self.nouns.first() {
            Some(n) => n.first_label().to_string(),
            None => return false,
        };
        if first_label == LABEL_DEPENDENT || first_label == LABEL_SUFFIX {
            return false;
        }

        self.main = self
            .nouns
            .iter()
            .filter(|n| n.first_label() != LABEL_DEPENDENT)
            .map(|n| n.lemma())
            .collect();
        self.main_surface = self
            .nouns
            .iter()
            .filter(|n| n.first_label() != LABEL_DEPENDENT)
            .map(|n| n.surface())
            .collect();
        self.chunk_type = ChunkType::Noun;

        if let Some(adj) = self.adjectives.first() {
            if adj.lemma() == lexicon::NEGATION_ADJECTIVE {
                self.negation = Negation::Negative;
            }
        }

        match first_label.as_str() {
            // 動作性名詞。単独で動詞を伴わずに並ぶ場合だけ名詞のまま残す。
            "サ変接続" => {
                if !(self.nouns.len() > 1 && self.verbs.is_empty()) {
                    self.chunk_type = ChunkType::Verb;
                    self.chunk_type2 = Some(SecondaryType::Noun);
                }
            }
            "形容動詞語幹" => {
                if self.nouns.len() <= 1 {
                    self.chunk_type = ChunkType::Adjective;
                    self.chunk_type2 = Some(SecondaryType::Verb);
                }
            }
            "固有名詞" => {
                self.named_entity = match self.nouns[0].label(1) {
                    "人名" => NamedEntity::Person,
                    "地域" => NamedEntity::Location,
                    "組織" => NamedEntity::Organization,
                    "一般" => NamedEntity::General,
                    _ => self.named_entity,
                };
            }
            "代名詞" => {
                self.pronoun = lexicon::classify_pronoun(self.nouns[0].lemma());
            }
            // 数はすべての名詞をまとめて1つの値として扱う。
            "数" => {
                self.main = self.nouns.iter().map(|n| n.lemma()).collect();
                self.main_surface = self.nouns.iter().map(|n| n.surface()).collect();
                self.named_entity = NamedEntity::Number;
            }
            _ => {}
        }
        true
    }

    /// 無意味主辞名詞の枝。先頭名詞の原形が無意味主辞集合にある場合に成立します。
    ///
    /// 先行する動詞があればその表層形を主成分の頭に付けて区別可能にします。
    fn branch_meaningless_noun(&mut self) -> bool {
        let first = match self.nouns.first() {
            Some(n) => n,
            None => return false,
        };
        if !lexicon::is_meaningless_head(first.lemma()) {
            return false;
        }
        if let Some(verb) = self.verbs.first() {
            self.main = verb.surface().to_string();
            self.main_surface = verb.surface().to_string();
        }
        let (lemma, surface) = (first.lemma().to_string(), first.surface().to_string());
        self.main.push_str(&lemma);
        self.main_surface.push_str(&surface);
        self.chunk_type = ChunkType::Noun;
        true
    }

    fn branch_adjective(&mut self) -> bool {
        let adj = match self.adjectives.first() {
            Some(a) => a,
            None => return false,
        };
        self.main = adj.lemma().to_string();
        self.main_surface = adj.surface().to_string();
        self.chunk_type = ChunkType::Adjective;
        if adj.lemma() == lexicon::NEGATION_ADJECTIVE {
            self.negation = Negation::Negative;
        }
        true
    }

    fn branch_verb(&mut self) -> bool {
        let verb = match self.verbs.first() {
            Some(v) => v,
            None => return false,
        };
        self.main = verb.lemma().to_string();
        self.main_surface = verb.surface().to_string();
        self.chunk_type = ChunkType::Verb;
        true
    }

    fn branch_adverb(&mut self) -> bool {
        let adv = match self.adverbs.first() {
            Some(a) => a,
            None => return false,
        };
        self.main = adv.lemma().to_string();
        self.main_surface = adv.surface().to_string();
        self.chunk_type = ChunkType::Adverb;
        true
    }

    fn branch_conjunction(&mut self) -> bool {
        let conj = match self.conjunctions.first() {
            Some(c) => c,
            None => return false,
        };
        self.main = conj.lemma().to_string();
        self.main_surface = conj.surface().to_string();
        self.chunk_type = ChunkType::Conjunction;
        true
    }

    fn branch_interjection(&mut self) -> bool {
        let interj = match self.interjections.first() {
            Some(i) => i,
            None => return false,
        };
        self.main = interj.lemma().to_string();
        self.main_surface = interj.surface().to_string();
        self.chunk_type = ChunkType::Interjection;
        true
    }

    fn branch_adnominal(&mut self) -> bool {
        let adn = match self.adnominals.first() {
            Some(a) => a,
            None => return false,
        };
        self.main = adn.lemma().to_string();
        self.main_surface = adn.surface().to_string();
        self.chunk_type = ChunkType::Adnominal;
        true
    }

    /// 助詞の枝。統語種別は未分類のまま残ります。
    fn branch_postposition(&mut self) -> bool {
        let postp = match self.postpositions.first() {
            Some(p) => p,
            None => return false,
        };
        self.main = postp.lemma().to_string();
        self.main_surface = postp.surface().to_string();
        true
    }

    /// 助動詞の枝。統語種別は未分類のまま残ります。
    fn branch_auxiliary_verb(&mut self) -> bool {
        let auxv = match self.auxiliary_verbs.first() {
            Some(a) => a,
            None => return false,
        };
        self.main = auxv.lemma().to_string();
        self.main_surface = auxv.surface().to_string();
        true
    }

    /// 記号の枝。名詞が同居している場合は名詞の方を主成分にします。
    fn branch_sign(&mut self) -> bool {
        let sign = match self.signs.first() {
            Some(s) => s,
            None => return false,
        };
        if let Some(noun) = self.nouns.first() {
            self.main = noun.lemma().to_string();
            self.main_surface = noun.surface().to_string();
        } else {
            self.main = sign.lemma().to_string();
            self.main_surface = sign.surface().to_string();
        }
        true
    }

    /// 単独の非自立名詞の枝。最後の受け皿として名詞扱いで確定します。
    fn branch_dependent_noun(&mut self) -> bool {
        let first = match self.nouns.first() {
            Some(n) => n,
            None => return false,
        };
        if first.first_label() != LABEL_DEPENDENT {
            return false;
        }
        self.main = first.lemma().to_string();
        self.main_surface = first.surface().to_string();
        self.chunk_type = ChunkType::Noun;
        true
    }

    /// 機能成分を解決し、そこから受動・使役・時制・疑問・否定の素性を導出します。
    ///
    /// 主成分の解決後に呼ぶ必要があります。
    fn resolve_func(&mut self) {
        self.func = remove_first(&self.surface, &self.main_surface);

        for verb in &self.verbs {
            match verb.first_label() {
                LABEL_SUFFIX => match verb.lemma() {
                    "れる" | "られる" => self.passive = true,
                    "させる" => self.compulsory = true,
                    _ => {}
                },
                LABEL_DEPENDENT => {
                    if verb.lemma() == "いる" {
                        self.tense = Tense::PresentContinuous;
                    }
                }
                _ => {}
            }
        }

        // 文末の疑問助詞は根チャンクでのみ疑問と解釈する。
        if self.parent == -1
            && self
                .postpositions
                .iter()
                .any(|p| lexicon::QUESTION_PARTICLES.contains(&p.lemma()))
        {
            self.question = true;
        }

        let negations = self
            .auxiliary_verbs
            .iter()
            .filter(|a| lexicon::NEGATION_AUXILIARIES.contains(&a.lemma()))
            .count();
        let has_question_mark = self.signs.iter().any(|s| s.surface() == lexicon::QUESTION_MARK);
        if negations == 1 {
            // 疑問符を伴う「ない」は否定ではなく問いかけ。
            if !has_question_mark {
                self.negation = Negation::Negative;
            }
        } else if negations > 1 {
            self.negation = if negations % 2 == 0 {
                Negation::DoubleNegative
            } else {
                Negation::Negative
            };
        }

        // 過去を示す助動詞は非自立動詞由来の現在進行より優先する。
        if self.auxiliary_verbs.iter().any(|a| a.lemma() == "た") {
            self.tense = Tense::Past;
        }

        // 名詞＋するのような動詞的用法の補正。
        if lexicon::VERB_LIKE_FUNCS.iter().any(|w| self.func.contains(w))
            && !lexicon::VERB_LIKE_EXCLUDE.contains(&self.func.as_str())
        {
            self.chunk_type = ChunkType::Verb;
        }

        if has_question_mark {
            self.question = true;
        }

        // 「できる」の副詞的な慣用用法。
        if self.main == "できる" && !matches!(self.func.as_str(), "た" | "ます" | "いるて") {
            self.chunk_type = ChunkType::Adverb;
        }
    }
}
