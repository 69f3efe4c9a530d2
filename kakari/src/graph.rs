//! 概念グラフの蓄積器
//!
//! このモジュールは、補正済みのチャンク列を多数の文にわたって折り畳み、
//! 重み付きの有向概念グラフを構築する蓄積器を提供します。ノードは
//! チャンクの最終的な主成分文字列をキーとし、文字列が一致するチャンクは
//! 文をまたいで同一ノードとみなされます。カウントと重みは単調に増加し、
//! 一度挿入されたキーが取り除かれることはありません。

use hashbrown::HashMap;

use crate::chunk::{Chunk, ChunkType};
use crate::lexicon;
use crate::tree::ChunkTree;

/// 概念グラフのノード情報
#[derive(Clone, Debug)]
pub struct NodeInfo {
    /// このノードが観測された回数
    pub count: u64,

    /// 最初に観測されたチャンクの統語種別
    pub chunk_type: ChunkType,

    /// 表示用の代表ラベル
    pub rep: String,

    /// 代表ラベルの文字数
    pub len: usize,
}

/// 概念グラフのエッジ情報
#[derive(Clone, Debug)]
pub struct EdgeInfo {
    /// このエッジが観測された回数
    pub weight: u64,

    /// 子チャンクの機能成分に由来するエッジラベル
    pub label: String,
}

/// 多数の係り受け木を折り畳んだ重み付き有向概念グラフ
///
/// ノード表は主成分文字列をキーとし、エッジ表は（子の主成分、親の主成分）の
/// 組をキーとします。この構造体がグラフを排他的に所有・変更し、チャンクは
/// 読み取り専用の入力です。
#[derive(Debug, Default)]
pub struct ConceptGraph {
    nodes: HashMap<String, NodeInfo>,
    edges: HashMap<(String, String), EdgeInfo>,
}

/// ノードとして計上する統語種別かを判定します。
#[inline(always)]
fn is_node_type(ty: ChunkType) -> bool {
    matches!(
        ty,
        ChunkType::Noun | ChunkType::Adjective | ChunkType::Verb | ChunkType::Adnominal
    )
}

/// エッジの端点になれる統語種別かを判定します。
#[inline(always)]
fn is_edge_type(ty: ChunkType) -> bool {
    ty != ChunkType::Unknown
}

impl ConceptGraph {
    /// 新しい空のグラフを作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 1発話分の補正済み係り受け木をグラフに折り畳みます。
    ///
    /// 名詞・形容詞・動詞・連体詞のチャンクをノードとして計上し、
    /// チャンクとその親がともに既知の統語種別を持つ場合にエッジを
    /// 計上します。計上対象外の主成分はノード・エッジのどちらの
    /// 端点にもなりません。
    ///
    /// # 引数
    ///
    /// * `tree` - 補正済みの係り受け木
    pub fn add_tree(&mut self, tree: &ChunkTree) {
        for chunk in tree.chunks() {
            self.add_node(chunk);
            self.add_edge(chunk, tree);
        }
    }

    fn add_node(&mut self, chunk: &Chunk) {
        if !is_node_type(chunk.chunk_type) || lexicon::is_uncounted(&chunk.main) {
            return;
        }
        self.nodes
            .entry_ref(chunk.main.as_str())
            .and_modify(|node| node.count += 1)
            .or_insert_with(|| NodeInfo {
                count: 1,
                chunk_type: chunk.chunk_type,
                rep: chunk.main.clone(),
                len: chunk.main.chars().count(),
            });
    }

    fn add_edge(&mut self, chunk: &Chunk, tree: &ChunkTree) {
        if chunk.parent < 0 {
            return;
        }
        let parent = tree.chunk(chunk.parent as usize);
        if !is_edge_type(chunk.chunk_type) || !is_edge_type(parent.chunk_type) {
            return;
        }
        if lexicon::is_uncounted(&chunk.main) || lexicon::is_uncounted(&parent.main) {
            return;
        }
        self.edges
            .entry((chunk.main.clone(), parent.main.clone()))
            .and_modify(|edge| edge.weight += 1)
            .or_insert_with(|| EdgeInfo {
                weight: 1,
                label: format!("{} ", chunk.func),
            });
    }

    /// ノード数を返します。
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// エッジ数を返します。
    #[inline(always)]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// 主成分文字列でノードを引きます。
    pub fn node(&self, main: &str) -> Option<&NodeInfo> {
        self.nodes.get(main)
    }

    /// （子の主成分、親の主成分）の組でエッジを引きます。
    pub fn edge(&self, child: &str, parent: &str) -> Option<&EdgeInfo> {
        self.edges.get(&(child.to_string(), parent.to_string()))
    }

    /// すべてのノードを走査するイテレータを返します。
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &NodeInfo)> {
        self.nodes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// すべてのエッジを走査するイテレータを返します。
    pub fn edges(&self) -> impl Iterator<Item = (&(String, String), &EdgeInfo)> {
        self.edges.iter()
    }

    /// グラフを空に戻します。
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}
