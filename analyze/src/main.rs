//! 概念グラフを構築するユーティリティ
//!
//! このバイナリは、標準入力（またはファイル）から読み込んだ
//! `cabocha -f1`形式の出力をブロック単位で解析し、蓄積された
//! 概念グラフのノード表・エッジ表をTSVで出力します。

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use kakari::errors::Result;
use kakari::DependencyAnalyzer;

use clap::Parser;

/// 出力モード
#[derive(Clone, Debug)]
enum OutputMode {
    Nodes,
    Edges,
    Both,
}

/// `OutputMode` の `FromStr` 実装
impl FromStr for OutputMode {
    type Err = &'static str;

    /// 文字列から出力モードをパースする
    ///
    /// # 引数
    ///
    /// * `mode` - パース対象の文字列（"nodes"、"edges"、"both"のいずれか）
    ///
    /// # 戻り値
    ///
    /// パースに成功した場合は対応する `OutputMode`、失敗した場合はエラーメッセージ
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "nodes" => Ok(Self::Nodes),
            "edges" => Ok(Self::Edges),
            "both" => Ok(Self::Both),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "analyze", about = "Builds a concept graph from cabocha -f1 output")]
struct Args {
    /// Input file in cabocha -f1 format. Reads stdin if omitted.
    #[clap(short = 'i', long)]
    input: Option<PathBuf>,

    /// Output mode. Choices are nodes, edges, and both.
    #[clap(short = 'O', long, default_value = "both")]
    output_mode: OutputMode,
}

/// 主成分文字列をTSVの1カラムに収まる形に整形する
///
/// タグが付いた主成分は改行を含むため、`\n`リテラルに置き換えます。
fn display_main(main: &str) -> String {
    main.replace('\n', "\\n")
}

/// メイン関数
///
/// 入力をEOS区切りのブロックに分けて解析器へ渡し、
/// 蓄積されたグラフを指定された形式で標準出力に出力します。
///
/// # 戻り値
///
/// 実行が成功した場合は `Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<()> {
    let args = Args::parse();

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    let mut analyzer = DependencyAnalyzer::new();
    let mut block = String::new();
    let mut num_blocks = 0usize;
    for line in reader.lines() {
        let line = line?;
        if line == "EOS" {
            if !block.is_empty() {
                analyzer.add_block(&block)?;
                num_blocks += 1;
                block.clear();
            }
            continue;
        }
        block.push_str(&line);
        block.push('\n');
    }
    if !block.is_empty() {
        analyzer.add_block(&block)?;
        num_blocks += 1;
    }

    let graph = analyzer.graph();
    eprintln!(
        "Processed {} blocks: {} nodes, {} edges",
        num_blocks,
        graph.num_nodes(),
        graph.num_edges()
    );

    let is_tty = atty::is(atty::Stream::Stdout);

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    if matches!(args.output_mode, OutputMode::Nodes | OutputMode::Both) {
        for (main, node) in graph.nodes() {
            writeln!(
                &mut out,
                "node\t{}\t{}\t{:?}\t{}",
                display_main(main),
                node.count,
                node.chunk_type,
                node.len,
            )?;
        }
    }
    if matches!(args.output_mode, OutputMode::Edges | OutputMode::Both) {
        for ((child, parent), edge) in graph.edges() {
            writeln!(
                &mut out,
                "edge\t{}\t{}\t{}\t{}",
                display_main(child),
                display_main(parent),
                edge.weight,
                edge.label.trim_end(),
            )?;
        }
    }
    if is_tty {
        out.flush()?;
    }

    Ok(())
}
