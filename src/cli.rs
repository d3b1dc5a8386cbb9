use anyhow::{bail, Result};
use clap::Parser;
use comfy_table::{Cell, Table};

use preview_finder::{search_and_get_links, SearchResult, SecondArg};

#[derive(Parser)]
#[command(
    name = "preview-finder",
    version,
    about = "Spotify 미리듣기 URL 검색기"
)]
pub struct Cli {
    /// 검색할 곡 제목
    pub song: String,

    /// 아티스트로 검색 범위 제한
    #[arg(long, short)]
    pub artist: Option<String>,

    /// 가져올 최대 곡 수 (기본값 5)
    #[arg(long, short, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// 결과를 JSON으로 출력
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// 플래그를 검색 호출 인자 형태로 변환한다.
    /// `--limit`만 주어지면 숫자 두 번째 인자(레거시 형태)로 전달한다.
    fn call_args(&self) -> (Option<SecondArg>, Option<i64>) {
        match (&self.artist, self.limit) {
            (Some(artist), limit) => (Some(SecondArg::Artist(artist.clone())), limit),
            (None, Some(limit)) => (Some(SecondArg::Limit(limit)), None),
            (None, None) => (None, None),
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let (second, limit) = cli.call_args();
    let result = search_and_get_links(Some(&cli.song), second, limit);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.success {
        print_table(&result);
    }

    if !result.success {
        bail!("{}", result.error.unwrap_or_default());
    }
    Ok(())
}

fn print_table(result: &SearchResult) {
    println!("검색어: {}\n", result.search_query.as_deref().unwrap_or_default());

    let mut table = Table::new();
    table.set_header(vec!["곡", "앨범", "발매일", "인기도", "길이", "미리듣기"]);

    for track in &result.results {
        let previews = if track.preview_urls.is_empty() {
            "-".to_string()
        } else {
            track.preview_urls.join("\n")
        };

        table.add_row(vec![
            Cell::new(&track.name),
            Cell::new(&track.album_name),
            Cell::new(track.release_date.as_deref().unwrap_or("-")),
            Cell::new(track.popularity),
            Cell::new(track.display_duration()),
            Cell::new(&previews),
        ]);
    }

    println!("{table}");
    println!(
        "\n총 {} 곡 (미리듣기 있음: {})",
        result.results.len(),
        result
            .results
            .iter()
            .filter(|t| !t.preview_urls.is_empty())
            .count(),
    );
}
