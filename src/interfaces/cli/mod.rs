/// CLI Interface Module
///
/// Command-line entry point: loads the team (and optionally match) CSV files,
/// builds the bounded `TeamCollection`, and prints it, a group of it, or a
/// single team found through the hybrid position/id lookup.
///
/// ## Responsibilities
/// - Parse command-line arguments
/// - Initialize logging
/// - Run ingestion and render the result as text or JSON

use crate::domain::collection::{LookupKey, TeamCollection};
use crate::domain::entities::{sort_by_date, Match, Team};
use crate::domain::errors::CollectionError;
use crate::ingestion::{load_matches, load_team_collection, IngestionConfig, IngestionError};
use clap::Parser;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

/// 命令行配置
#[derive(Parser, Debug, Clone)]
#[command(name = "tournament-teams")]
#[command(author = "Tournament Teams Team")]
#[command(version = "0.1.0")]
#[command(about = "球队/比赛数据加载与定长有序球队集合查询", long_about = None)]
pub struct CliConfig {
    /// 球队 CSV 文件
    #[arg(short = 't', long, default_value = "data/teams.csv")]
    pub teams: PathBuf,

    /// 比赛 CSV 文件（可选，按日期排序后输出）
    #[arg(short = 'm', long)]
    pub matches: Option<PathBuf>,

    /// 仅输出指定组别
    #[arg(short = 'g', long)]
    pub group: Option<String>,

    /// 按位置或球队标识查找单支球队（整数优先视为位置）
    #[arg(short = 'k', long)]
    pub lookup: Option<String>,

    /// 降序排列
    #[arg(short = 'r', long, default_value_t = false)]
    pub reverse: bool,

    /// 以 JSON 输出
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// 日志级别
    #[arg(short = 'l', long, default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,

    /// 仅显示配置不加载数据（用于调试）
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl CliConfig {
    pub fn ingestion_config(&self) -> IngestionConfig {
        let config = IngestionConfig::new(&self.teams);
        match &self.matches {
            Some(path) => config.with_matches(path),
            None => config,
        }
    }
}

/// CLI 错误
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Ingestion(#[from] IngestionError),

    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON 输出结构
#[derive(Serialize)]
struct Report<'a> {
    teams: Vec<&'a Team>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    matches: Vec<&'a Match>,
}

/// Runs the CLI application
pub fn run() -> ExitCode {
    let config = CliConfig::parse();

    init_logging(&config.log_level);

    tracing::info!("配置: {:?}", config);

    if config.dry_run {
        println!("球队文件:     {}", config.teams.display());
        match &config.matches {
            Some(path) => println!("比赛文件:     {}", path.display()),
            None => println!("比赛文件:     (无)"),
        }
        println!("\nDry-run 模式 - 不加载数据");
        return ExitCode::SUCCESS;
    }

    match execute(&config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads the configured files and renders the requested view
pub fn execute(config: &CliConfig) -> Result<String, CliError> {
    let ingestion = config.ingestion_config();

    let teams = load_team_collection(&ingestion.teams_path)?;
    tracing::debug!("collection holds {} of {} teams", teams.len(), teams.capacity());

    let matches = match &ingestion.matches_path {
        Some(path) => {
            let mut matches = load_matches(path)?;
            sort_by_date(&mut matches);
            matches
        }
        None => Vec::new(),
    };

    render(config, teams, &matches)
}

/// 按配置渲染输出
pub fn render(config: &CliConfig, mut teams: TeamCollection, matches: &[Match]) -> Result<String, CliError> {
    if config.reverse {
        teams.sort(true);
    }

    if let Some(key) = &config.lookup {
        let team = teams.get(LookupKey::parse(key))?;
        return if config.json {
            Ok(serde_json::to_string_pretty(team)?)
        } else {
            Ok(team.to_string())
        };
    }

    let selected: Vec<&Team> = match &config.group {
        Some(group) => teams.iter().filter(|t| t.group() == group).collect(),
        None => teams.iter().collect(),
    };
    let matches: Vec<&Match> = matches
        .iter()
        .filter(|m| config.group.is_none() || m.group() == config.group.as_deref())
        .collect();

    if config.json {
        let report = Report {
            teams: selected,
            matches,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = String::new();
    for (position, team) in selected.iter().enumerate() {
        let _ = writeln!(out, "{:>2}  {:<6} {}", position, team.team_id(), team);
    }
    for m in &matches {
        let _ = writeln!(out, "{}  {}", m.date().format("%Y-%m-%d %H:%M"), m);
    }
    Ok(out.trim_end().to_string())
}

/// 初始化日志系统
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
