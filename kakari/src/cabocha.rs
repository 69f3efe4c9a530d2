//! 外部解析器のブロック出力のパーサ
//!
//! このモジュールは、外部係り受け解析器（CaboChaの`-f1`形式）が出力する
//! 発話単位のブロックを解析し、チャンク分類・木の組み立て・2つの補正パスを
//! 経た[`ChunkTree`]を生成します。チャンクヘッダ行（`* id parentD …`）が
//! 新しいチャンクを開始し、それ以外の行は蓄積中のチャンクへの形態素行として
//! 扱われます。
//!
//! 文書位置と代名詞の通し順位は[`DocumentContext`]が保持し、ブロックを
//! またいで単調に進みます。

use regex::Regex;

use crate::chunk::builder::ChunkBuilder;
use crate::chunk::Chunk;
use crate::errors::{KakariError, Result};
use crate::tree::ChunkTree;

/// チャンクヘッダ行の先頭マーカー
const HEADER_MARKER: char = '*';

/// 外部解析器の文末マーカー行
const END_OF_SENTENCE: &str = "EOS";

/// ブロック処理をまたいで引き継がれる文書単位の状態
///
/// 文書内でのブロック位置と、これまでに見つかった代名詞の数を保持します。
/// 両者とも単調に増加し、代名詞チャンクの主成分に付く`[位置@順位]`タグの
/// 材料になります。
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentContext {
    /// 文書内での現在のブロック位置
    pub position: usize,

    /// 文書内でこれまでに見つかった代名詞の数
    pub pronoun_rank: u32,
}

impl DocumentContext {
    /// 新しい文書コンテキストを作成します。
    pub fn new() -> Self {
        Self::default()
    }
}

/// 外部解析器のブロック出力を解析するパーサ
///
/// 行指向のブロックを読み、チャンクごとに[`ChunkBuilder`]で分類したうえで
/// 木を組み立て、無意味主辞の置換と否定スコープの伝播を適用します。
pub struct CabochaParser {
    row_splitter: Regex,
}

impl Default for CabochaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CabochaParser {
    /// 新しいパーサを作成します。
    pub fn new() -> Self {
        Self {
            // 形態素行はカンマまたはタブで区切られる。
            row_splitter: Regex::new(r"[,]+|\t").unwrap(),
        }
    }

    /// 1発話分のブロックを解析し、補正済みの係り受け木を返します。
    ///
    /// ヘッダ行を見つけるたびに直前のチャンクを確定し、ブロック末尾で
    /// 最後のチャンクを確定します。代名詞に分類されたチャンクを確定する
    /// たびに`ctx`の代名詞順位を進めます。全チャンクの確定後、木を
    /// 組み立てて2つの補正パスをこの順で適用します。
    ///
    /// # 引数
    ///
    /// * `block` - 1発話分のブロックテキスト
    /// * `ctx` - 文書コンテキスト
    ///
    /// # 戻り値
    ///
    /// 補正済みの係り受け木
    ///
    /// # エラー
    ///
    /// ヘッダ行のid・親idが読めない場合や親idがブロック外を指す場合、
    /// ヘッダより前に形態素行が現れた場合、形態素行のカラムが不足している
    /// 場合にエラーを返します。
    pub fn parse_block(&self, block: &str, ctx: &mut DocumentContext) -> Result<ChunkTree> {
        let mut chunks: Vec<Chunk> = vec![];
        let mut current: Option<ChunkBuilder> = None;

        for line in block.lines() {
            if line.is_empty() || line == END_OF_SENTENCE {
                continue;
            }
            if line.starts_with(HEADER_MARKER) {
                if let Some(builder) = current.take() {
                    Self::finalize(builder, &mut chunks, ctx);
                }
                let (id, parent) = Self::parse_header(line)?;
                current = Some(ChunkBuilder::new(id, parent));
            } else {
                let builder = current.as_mut().ok_or_else(|| {
                    KakariError::invalid_argument(
                        "block",
                        "morpheme row appeared before any chunk header",
                    )
                })?;
                let fields: Vec<&str> = self.row_splitter.split(line).collect();
                builder.push_row(&fields)?;
            }
        }
        if let Some(builder) = current.take() {
            Self::finalize(builder, &mut chunks, ctx);
        }

        // 親idがブロック外を指すチャンクがあると後段のグラフ折り畳みが
        // 成立しないため、ここで不正な入力として弾く。
        for chunk in &chunks {
            if chunk.parent >= 0 && chunk.parent as usize >= chunks.len() {
                return Err(KakariError::invalid_format(
                    "header",
                    format!(
                        "parent id {} is out of range for {} chunks",
                        chunk.parent,
                        chunks.len()
                    ),
                ));
            }
        }

        let mut tree = ChunkTree::assemble(chunks);
        tree.propagate_meaningless_heads();
        tree.propagate_negation_scope();
        Ok(tree)
    }

    /// 蓄積中のチャンクを確定して列に加え、代名詞なら順位を進めます。
    fn finalize(builder: ChunkBuilder, chunks: &mut Vec<Chunk>, ctx: &mut DocumentContext) {
        let chunk = builder.finish(ctx.position, ctx.pronoun_rank);
        if chunk.pronoun.is_some() {
            ctx.pronoun_rank += 1;
        }
        chunks.push(chunk);
    }

    /// チャンクヘッダ行からidと親idを取り出します。
    ///
    /// ヘッダは空白区切りで`* <id> <parent>D …`の形をとり、親idの
    /// 末尾1文字（係りラベル）は取り除いてから解釈します。
    fn parse_header(line: &str) -> Result<(usize, i32)> {
        let mut tokens = line.split_whitespace();
        tokens.next(); // マーカー
        let id = tokens
            .next()
            .ok_or_else(|| KakariError::invalid_format("header", "missing chunk id"))?
            .parse::<usize>()?;
        let parent_token = tokens
            .next()
            .ok_or_else(|| KakariError::invalid_format("header", "missing parent id"))?;
        // 末尾1文字は文字境界で切り落とす。マルチバイトの係りラベルでも
        // パニックせず、残りが数値でなければパースエラーになる。
        let parent = match parent_token.char_indices().last() {
            Some((at, _)) if at > 0 => parent_token[..at].parse::<i32>()?,
            _ => {
                return Err(KakariError::invalid_format(
                    "header",
                    format!("malformed parent token: {parent_token:?}"),
                ))
            }
        };
        Ok((id, parent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::ChunkType;

    #[test]
    fn test_parse_header() {
        assert_eq!(CabochaParser::parse_header("* 0 1D 0/1 -1.514").unwrap(), (0, 1));
        assert_eq!(CabochaParser::parse_header("* 3 -1D 0/0 0.000").unwrap(), (3, -1));
        assert!(CabochaParser::parse_header("* 0").is_err());
        assert!(CabochaParser::parse_header("* x 1D").is_err());
        assert!(CabochaParser::parse_header("* 0 あ 0/0").is_err());
    }

    #[test]
    fn test_multibyte_parent_token_is_rejected() {
        // 親idトークンがマルチバイト文字でもパニックせずエラーになる。
        let block = "* 0 あいD 0/0 0.000\n\
                     猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\n\
                     EOS\n";
        let mut ctx = DocumentContext::new();
        assert!(CabochaParser::new().parse_block(block, &mut ctx).is_err());
    }

    #[test]
    fn test_out_of_range_parent_id_is_rejected() {
        let block = "* 0 5D 0/0 0.000\n\
                     猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\n\
                     EOS\n";
        let mut ctx = DocumentContext::new();
        assert!(CabochaParser::new().parse_block(block, &mut ctx).is_err());
    }

    #[test]
    fn test_parse_block_builds_corrected_tree() {
        let block = "* 0 1D 0/1 -1.514\n\
                     猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\n\
                     が\t助詞,格助詞,一般,*,*,*,が,ガ,ガ\n\
                     * 1 -1D 0/1 0.000\n\
                     いる\t動詞,自立,*,*,一段,基本形,いる,イル,イル\n\
                     EOS\n";
        let mut ctx = DocumentContext::new();
        let tree = CabochaParser::new().parse_block(block, &mut ctx).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.root(), 1);
        assert_eq!(tree.chunk(0).main, "猫");
        assert_eq!(tree.chunk(0).chunk_type, ChunkType::Noun);
        assert_eq!(tree.chunk(1).main, "いる");
        assert_eq!(tree.chunk(1).chunk_type, ChunkType::Verb);
        assert_eq!(tree.chunk(1).children, vec![0]);
    }

    #[test]
    fn test_reading_column_defaults_to_surface() {
        let block = "* 0 -1D 0/0 0.000\n\
                     猫\t名詞,一般,*,*,*,*,猫\n\
                     EOS\n";
        let mut ctx = DocumentContext::new();
        let tree = CabochaParser::new().parse_block(block, &mut ctx).unwrap();
        assert_eq!(tree.chunk(0).yomi, "猫");
    }

    #[test]
    fn test_row_before_header_is_rejected() {
        let block = "猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\n";
        let mut ctx = DocumentContext::new();
        assert!(CabochaParser::new().parse_block(block, &mut ctx).is_err());
    }

    #[test]
    fn test_pronoun_rank_advances_across_blocks() {
        let parser = CabochaParser::new();
        let mut ctx = DocumentContext::new();
        let block = "* 0 -1D 0/0 0.000\n\
                     私\t名詞,代名詞,一般,*,*,*,私,ワタシ,ワタシ\n\
                     EOS\n";
        let tree = parser.parse_block(block, &mut ctx).unwrap();
        assert_eq!(tree.chunk(0).main, "私[0@0]");

        ctx.position += 1;
        let block = "* 0 -1D 0/0 0.000\n\
                     彼\t名詞,代名詞,一般,*,*,*,彼,カレ,カレ\n\
                     EOS\n";
        let tree = parser.parse_block(block, &mut ctx).unwrap();
        assert_eq!(tree.chunk(0).main, "彼[1@1]");
        assert_eq!(tree.chunk(0).pronoun_rank, 1);
        assert_eq!(ctx.pronoun_rank, 2);
    }
}
