//! # kakari
//!
//! kakariは、外部の日本語係り受け解析器（CaboChaの`-f1`形式）の形態素単位の
//! 出力を、意味ラベル付きの係り受け木に変換し、多数の木を重み付きの
//! 概念グラフへ折り畳むライブラリです。
//!
//! ## 概要
//!
//! 外部解析器が文節（チャンク）単位にまとめた形態素のストリームを受け取り、
//! 各チャンクに意味的な主成分・機能成分・統語種別・素性（否定・受動・使役・
//! 時制・疑問・固有表現・代名詞）を割り当てます。続いて親ポインタから
//! 係り受け木を組み立て、チャンク単位では計算できない2つの補正
//! （無意味主辞の置換と否定スコープの伝播）を木全体に適用します。
//! 補正済みのチャンク列は概念グラフのノード・エッジとして計上されます。
//!
//! 形態素解析や係り受けの付与そのものは行いません。外部解析器が出力した
//! 品詞タグと親idを信頼して読み取ります。
//!
//! ## 使用例
//!
//! ```
//! use kakari::{ChunkType, DependencyAnalyzer};
//!
//! let block = "* 0 1D 0/1 -1.514\n\
//!              猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\n\
//!              が\t助詞,格助詞,一般,*,*,*,が,ガ,ガ\n\
//!              * 1 -1D 0/1 0.000\n\
//!              いる\t動詞,自立,*,*,一段,基本形,いる,イル,イル\n\
//!              EOS\n";
//!
//! let mut analyzer = DependencyAnalyzer::new();
//! let tree = analyzer.add_block(block)?;
//!
//! assert_eq!(tree.root(), 1);
//! assert_eq!(tree.chunk(0).main, "猫");
//! assert_eq!(tree.chunk(0).chunk_type, ChunkType::Noun);
//! assert_eq!(tree.chunk(1).children, vec![0]);
//!
//! let graph = analyzer.graph();
//! assert_eq!(graph.node("猫").unwrap().count, 1);
//! assert_eq!(graph.edge("猫", "いる").unwrap().weight, 1);
//! # Ok::<(), kakari::errors::KakariError>(())
//! ```

/// グラフ折り畳みのファサード
pub mod analyzer;

/// 外部解析器のブロック出力のパーサ
pub mod cabocha;

/// チャンクの最終レコードと素性列挙型
pub mod chunk;

/// エラー型の定義
pub mod errors;

/// 概念グラフの蓄積器
pub mod graph;

/// 固定語彙テーブル
pub mod lexicon;

/// 形態素レコードの定義
pub mod morpheme;

/// 1発話分の係り受け木
pub mod tree;

/// 正規化・文分割ユーティリティ
pub mod utils;

#[cfg(test)]
mod tests;

// Re-exports
pub use analyzer::DependencyAnalyzer;
pub use cabocha::{CabochaParser, DocumentContext};
pub use chunk::{
    Chunk, ChunkType, NamedEntity, Negation, PronounClass, SecondaryType, Tense,
};
pub use graph::ConceptGraph;
pub use tree::ChunkTree;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
