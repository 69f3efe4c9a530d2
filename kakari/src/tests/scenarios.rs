//! パーサ・補正パス・グラフ蓄積を横断するシナリオテスト

use crate::analyzer::DependencyAnalyzer;
use crate::cabocha::{CabochaParser, DocumentContext};
use crate::chunk::{ChunkType, Negation, Tense};

fn parse(block: &str) -> crate::tree::ChunkTree {
    let mut ctx = DocumentContext::new();
    CabochaParser::new().parse_block(block, &mut ctx).unwrap()
}

#[test]
fn test_tense_detection_is_chunk_local() {
    // 時制の検出はチャンク自身の蓄積リストだけを見る。根の「いる」は
    // 自立動詞なので、子に名詞があっても現在進行にはならない。
    let block = "* 0 1D 0/1 -1.514\n\
                 猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\n\
                 が\t助詞,格助詞,一般,*,*,*,が,ガ,ガ\n\
                 * 1 -1D 0/1 0.000\n\
                 いる\t動詞,自立,*,*,一段,基本形,いる,イル,イル\n\
                 EOS\n";
    let tree = parse(block);
    assert_eq!(tree.chunk(0).main, "猫");
    assert_eq!(tree.chunk(0).chunk_type, ChunkType::Noun);
    assert_eq!(tree.chunk(1).tense, Tense::None);
    assert_eq!(tree.chunk(1).main, "いる");

    // 同じ「いる」でも非自立として自チャンクに現れれば現在進行になる。
    let block = "* 0 1D 0/1 -1.514\n\
                 猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\n\
                 が\t助詞,格助詞,一般,*,*,*,が,ガ,ガ\n\
                 * 1 -1D 0/2 0.000\n\
                 泳い\t動詞,自立,*,*,五段・ガ行,連用タ接続,泳ぐ,オヨイ,オヨイ\n\
                 で\t助詞,接続助詞,*,*,*,*,で,デ,デ\n\
                 いる\t動詞,非自立,*,*,一段,基本形,いる,イル,イル\n\
                 EOS\n";
    let tree = parse(block);
    assert_eq!(tree.chunk(1).tense, Tense::PresentContinuous);
    assert_eq!(tree.chunk(1).main, "泳ぐ\n(現在)");
}

#[test]
fn test_meaningless_head_borrows_meaning_from_child() {
    let block = "* 0 1D 0/0 -1.000\n\
                 行く\t動詞,自立,*,*,五段・カ行促音便,基本形,行く,イク,イク\n\
                 * 1 -1D 0/1 0.000\n\
                 こと\t名詞,非自立,一般,*,*,*,こと,コト,コト\n\
                 だ\t助動詞,*,*,*,特殊・ダ,基本形,だ,ダ,ダ\n\
                 EOS\n";
    let tree = parse(block);
    assert_eq!(tree.chunk(0).main, "行く");
    assert_eq!(tree.chunk(1).main, "(行く)\nこと");
    assert_eq!(tree.chunk(1).meaning, "行く");
    assert_eq!(tree.chunk(1).chunk_type, ChunkType::Noun);
}

#[test]
fn test_negation_scope_relocated_to_governed_chunk() {
    let block = "* 0 1D 0/0 -1.000\n\
                 食べる\t動詞,自立,*,*,一段,基本形,食べる,タベル,タベル\n\
                 * 1 -1D 0/0 0.000\n\
                 ない\t形容詞,自立,*,*,形容詞・アウオ段,基本形,ない,ナイ,ナイ\n\
                 EOS\n";
    let tree = parse(block);

    // 否定は被支配チャンクへ移る。
    assert_eq!(tree.chunk(0).main, "食べる\n(否定)");
    assert_eq!(tree.chunk(0).negation, Negation::Negative);
    assert_eq!(tree.chunk(1).meaning, "食べる\n(否定)");

    // 「ない」は無意味主辞でもあるため先に子の表層形で包まれるが、
    // 自身の否定タグはちょうど一度だけ取り除かれている。
    assert_eq!(tree.chunk(1).main, "(食べる)\nない");
}

#[test]
fn test_children_round_trip_recovers_parents() {
    let block = "* 0 3D 0/1 -2.000\n\
                 私\t名詞,代名詞,一般,*,*,*,私,ワタシ,ワタシ\n\
                 は\t助詞,係助詞,*,*,*,*,は,ハ,ワ\n\
                 * 1 2D 0/0 -1.500\n\
                 赤い\t形容詞,自立,*,*,形容詞・アウオ段,基本形,赤い,アカイ,アカイ\n\
                 * 2 3D 0/1 -1.000\n\
                 魚\t名詞,一般,*,*,*,*,魚,サカナ,サカナ\n\
                 を\t助詞,格助詞,一般,*,*,*,を,ヲ,ヲ\n\
                 * 3 -1D 0/1 0.000\n\
                 食べ\t動詞,自立,*,*,一段,連用形,食べる,タベ,タベ\n\
                 た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ\n\
                 EOS\n";
    let tree = parse(block);
    assert_eq!(tree.root(), 3);
    assert_eq!(tree.chunk(3).children, vec![0, 2]);
    assert_eq!(tree.chunk(2).children, vec![1]);
    for chunk in tree.chunks() {
        for &child in &chunk.children {
            assert_eq!(tree.chunk(child).parent, chunk.id as i32);
        }
    }
    assert_eq!(tree.chunk(3).main, "食べる\n(過去)");
}

#[test]
fn test_document_wide_pronoun_ranks() {
    let mut analyzer = DependencyAnalyzer::new();
    let first = "* 0 -1D 0/1 0.000\n\
                 私\t名詞,代名詞,一般,*,*,*,私,ワタシ,ワタシ\n\
                 は\t助詞,係助詞,*,*,*,*,は,ハ,ワ\n\
                 EOS\n";
    let second = "* 0 -1D 0/1 0.000\n\
                  彼\t名詞,代名詞,一般,*,*,*,彼,カレ,カレ\n\
                  が\t助詞,格助詞,一般,*,*,*,が,ガ,ガ\n\
                  EOS\n";
    let tree = analyzer.add_block(first).unwrap();
    assert_eq!(tree.chunk(0).main, "私[0@0]");
    let tree = analyzer.add_block(second).unwrap();
    assert_eq!(tree.chunk(0).main, "彼[1@1]");
    assert_eq!(analyzer.context().pronoun_rank, 2);
    assert_eq!(analyzer.context().position, 2);
}

#[test]
fn test_graph_grows_monotonically_across_blocks() {
    let block = "* 0 1D 0/1 -1.514\n\
                 犬\t名詞,一般,*,*,*,*,犬,イヌ,イヌ\n\
                 が\t助詞,格助詞,一般,*,*,*,が,ガ,ガ\n\
                 * 1 -1D 0/1 0.000\n\
                 走る\t動詞,自立,*,*,五段・ラ行,基本形,走る,ハシル,ハシル\n\
                 EOS\n";
    let mut analyzer = DependencyAnalyzer::new();
    analyzer.add_block(block).unwrap();
    analyzer.add_block(block).unwrap();

    let graph = analyzer.graph();
    assert_eq!(graph.node("犬").unwrap().count, 2);
    assert_eq!(graph.node("走る").unwrap().count, 2);
    assert_eq!(graph.edge("犬", "走る").unwrap().weight, 2);
    assert_eq!(graph.num_nodes(), 2);
    assert_eq!(graph.num_edges(), 1);

    analyzer.reset();
    assert_eq!(analyzer.graph().num_nodes(), 0);
    assert_eq!(analyzer.graph().num_edges(), 0);
    assert_eq!(analyzer.context().position, 0);
    assert_eq!(analyzer.context().pronoun_rank, 0);
}
