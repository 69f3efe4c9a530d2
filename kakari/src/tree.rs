//! 1発話分の係り受け木
//!
//! このモジュールは、確定済みチャンクの列から親ポインタの逆写像として
//! 子リストを導出した[`ChunkTree`]と、チャンク単位では計算できない
//! 2つの木レベル補正パス（無意味主辞の置換・否定スコープの伝播）を
//! 提供します。両パスはブロック内の全チャンクが確定した後に、
//! この順で一度ずつ実行されます。

use crate::chunk::{Chunk, Negation, TAG_NEGATIVE};
use crate::lexicon;
use crate::utils::normalize_main;

/// 1発話（文）分の係り受け木
///
/// チャンク列（添字 == チャンクid）と根チャンクidを保持します。
/// 子リストは組み立て時に親ポインタから導出され、以後の補正パスが
/// 参照します。
#[derive(Clone, Debug, Default)]
pub struct ChunkTree {
    chunks: Vec<Chunk>,
    root: Option<usize>,
}

impl ChunkTree {
    /// 確定済みチャンクの列から木を組み立てます。
    ///
    /// 各チャンクの子リストを親ポインタの逆写像として計算し、
    /// 親を持たないチャンクを根として記録します。外部解析器は
    /// ブロックごとに高々1つの根を出力すると信頼しており、
    /// 根相当のチャンクが複数あった場合は最後のものが採用されます。
    ///
    /// # 引数
    ///
    /// * `chunks` - 確定済みチャンクの列（添字 == チャンクid）
    pub fn assemble(mut chunks: Vec<Chunk>) -> Self {
        let mut children = vec![vec![]; chunks.len()];
        let mut root = None;
        for (i, chunk) in chunks.iter().enumerate() {
            if chunk.is_root() {
                root = Some(i);
            } else {
                let pid = chunk.parent as usize;
                if let Some(list) = children.get_mut(pid) {
                    list.push(i);
                }
            }
        }
        for (chunk, list) in chunks.iter_mut().zip(children) {
            chunk.children = list;
        }
        Self { chunks, root }
    }

    /// チャンク数を返します。
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// 木が空かどうかを返します。
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// チャンク列への参照を返します。
    #[inline(always)]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// `id`番目のチャンクへの参照を返します。
    ///
    /// # パニック
    ///
    /// `id`が範囲外の場合、パニックします。
    #[inline(always)]
    pub fn chunk(&self, id: usize) -> &Chunk {
        &self.chunks[id]
    }

    /// 根チャンクのidを返します。
    ///
    /// # パニック
    ///
    /// 木が根を持たない場合（空の木など）、パニックします。
    pub fn root(&self) -> usize {
        self.root.expect("chunk tree has no root chunk")
    }

    /// 無意味主辞の置換パスを実行します。
    ///
    /// 正規化した主成分が無意味主辞集合にあるチャンクについて、
    /// 最後の子チャンクの主成分を`meaning`として記録し、自身の主成分を
    /// `"(<子の表層形>)\n<元の主成分>"`に書き換えます。既に`meaning`が
    /// 設定されているチャンクは飛ばすため、再実行しても二重に
    /// 包み直されることはありません。
    pub fn propagate_meaningless_heads(&mut self) {
        for i in 0..self.chunks.len() {
            if !self.chunks[i].meaning.is_empty() {
                continue;
            }
            if !lexicon::is_meaningless_head(&normalize_main(&self.chunks[i].main)) {
                continue;
            }
            let last = match self.chunks[i].children.last() {
                Some(&last) => last,
                None => continue,
            };
            let child_surface = self.chunks[last].surface.clone();
            let child_main = self.chunks[last].main.clone();
            let chunk = &mut self.chunks[i];
            chunk.main = format!("({})\n{}", child_surface, chunk.main);
            chunk.meaning = child_main;
        }
    }

    /// 否定スコープの伝播パスを実行します。
    ///
    /// 正規化した主成分が否定形容詞そのものであるチャンクについて、
    /// 最後の子チャンクの主成分に否定タグを付加してその否定フラグを立て、
    /// タグ付加後の子の主成分を自身の`meaning`として記録します。
    /// 否定は被支配チャンク側に移されたので、自身の主成分からは
    /// 否定タグをちょうど一度だけ取り除きます。
    pub fn propagate_negation_scope(&mut self) {
        for i in 0..self.chunks.len() {
            if normalize_main(&self.chunks[i].main) != lexicon::NEGATION_ADJECTIVE {
                continue;
            }
            if let Some(&last) = self.chunks[i].children.last() {
                self.chunks[last].main.push_str(TAG_NEGATIVE);
                self.chunks[last].negation = Negation::Negative;
                self.chunks[i].meaning = self.chunks[last].main.clone();
            }
            let stripped = self.chunks[i].main.replacen(TAG_NEGATIVE, "", 1);
            self.chunks[i].main = stripped;
        }
    }
}
