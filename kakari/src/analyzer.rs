//! 係り受け解析の結果を概念グラフへ折り畳むファサード
//!
//! このモジュールは、パーサ・文書コンテキスト・概念グラフをまとめて所有し、
//! 外部解析器のブロック出力を1つずつ受け取ってグラフを成長させる
//! [`DependencyAnalyzer`]を提供します。

use crate::cabocha::{CabochaParser, DocumentContext};
use crate::errors::Result;
use crate::graph::ConceptGraph;
use crate::tree::ChunkTree;

/// 外部解析器のブロック出力を概念グラフへ折り畳む解析器
///
/// ブロックごとに係り受け木を構築してグラフに計上し、文書位置と
/// 代名詞順位を進めます。ブロックは文書順に逐次処理される想定です。
///
/// # 例
///
/// ```
/// use kakari::DependencyAnalyzer;
///
/// let block = "* 0 1D 0/1 -1.514\n\
///              猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\n\
///              は\t助詞,係助詞,*,*,*,*,は,ハ,ワ\n\
///              * 1 -1D 0/1 0.000\n\
///              いる\t動詞,自立,*,*,一段,基本形,いる,イル,イル\n\
///              EOS\n";
/// let mut analyzer = DependencyAnalyzer::new();
/// let tree = analyzer.add_block(block).unwrap();
/// assert_eq!(tree.chunk(0).main, "猫");
/// assert_eq!(analyzer.graph().node("猫").unwrap().count, 1);
/// assert_eq!(analyzer.graph().edge("猫", "いる").unwrap().label, "は ");
/// ```
#[derive(Default)]
pub struct DependencyAnalyzer {
    parser: CabochaParser,
    ctx: DocumentContext,
    graph: ConceptGraph,
}

impl DependencyAnalyzer {
    /// 新しい解析器を作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 1発話分のブロックを解析し、グラフに折り畳みます。
    ///
    /// 解析に成功すると文書位置が1つ進みます。返される木は補正済みで、
    /// 以後は読み取り専用です。
    ///
    /// # 引数
    ///
    /// * `block` - 外部解析器が出力した1発話分のブロック
    ///
    /// # 戻り値
    ///
    /// 補正済みの係り受け木
    ///
    /// # エラー
    ///
    /// ブロックの書式が不正な場合にエラーを返します。
    pub fn add_block(&mut self, block: &str) -> Result<ChunkTree> {
        let tree = self.parser.parse_block(block, &mut self.ctx)?;
        self.graph.add_tree(&tree);
        self.ctx.position += 1;
        Ok(tree)
    }

    /// 蓄積された概念グラフへの参照を返します。
    #[inline(always)]
    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    /// 現在の文書コンテキストを返します。
    #[inline(always)]
    pub fn context(&self) -> DocumentContext {
        self.ctx
    }

    /// グラフと文書コンテキストを空の状態に戻します。
    pub fn reset(&mut self) {
        self.graph.clear();
        self.ctx = DocumentContext::new();
    }
}
