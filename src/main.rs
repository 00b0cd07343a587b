// ==========================================
// 非常食在庫通知 - 命令行入口
// ==========================================
// 用法: stock-alert --source stock.xlsx --outbox ./outbox
// 退出码: 0 成功/无需通知, 1 未配置收件地址, 2 其他错误
// ==========================================

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use stock_alert::config::{
    get_default_properties_path, ConfigManager, EnvPropertyStore, FilePropertyStore,
};
use stock_alert::mail::{LogMailer, MailSender, OutboxMailer};
use stock_alert::{AlertError, AlertOrchestrator, FileRowSource, RunOutcome};

#[derive(Parser, Debug)]
#[command(name = "stock-alert")]
#[command(version, about = "非常食の在庫をチェックして通知メールを作成します")]
struct Cli {
    /// 在庫表（.csv / .xlsx / .xls）
    #[arg(short, long)]
    source: PathBuf,

    /// Excel のワークシート名（省略時は先頭シート）
    #[arg(long)]
    sheet: Option<String>,

    /// プロパティファイル（JSON）
    #[arg(short, long)]
    properties: Option<PathBuf>,

    /// 出力先ディレクトリ（省略時は送信せずログのみ）
    #[arg(short, long)]
    outbox: Option<PathBuf>,

    /// 基準日 YYYY-MM-DD（省略時は今日）
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// JSON 形式でログを出力
    #[arg(long)]
    json_log: bool,
}

fn build_config(cli: &Cli) -> anyhow::Result<ConfigManager> {
    // 环境变量优先于属性文件
    let mut manager = ConfigManager::new().with_store(Box::new(EnvPropertyStore::default()));

    match &cli.properties {
        Some(path) => {
            let store = FilePropertyStore::load(path)
                .with_context(|| format!("プロパティファイルを読み込めません: {}", path.display()))?;
            manager = manager.with_store(Box::new(store));
        }
        None => {
            if let Some(path) = get_default_properties_path().filter(|p| p.exists()) {
                tracing::debug!(path = %path.display(), "使用默认属性文件");
                manager = manager.with_store(Box::new(FilePropertyStore::load(&path)?));
            }
        }
    }

    Ok(manager)
}

fn run(cli: &Cli) -> anyhow::Result<RunOutcome> {
    let settings = build_config(cli)?.load_settings()?;
    let reference_date = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let source = FileRowSource::new(&cli.source).with_sheet(cli.sheet.clone());
    let mailer: Box<dyn MailSender> = match &cli.outbox {
        Some(dir) => Box::new(OutboxMailer::new(dir)),
        None => Box::new(LogMailer),
    };

    let outcome =
        AlertOrchestrator::new().run(&source, mailer.as_ref(), &settings, reference_date)?;
    Ok(outcome)
}

/// 通知作成後の完了ログ（出力先なしは試運行）
fn completion_message(delivered: bool) -> &'static str {
    if delivered {
        "完了: 通知を送信しました"
    } else {
        "完了(試運行): 出力先未指定のため通知は送信していません"
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    stock_alert::logging::init(cli.json_log);

    tracing::info!("{} v{}", stock_alert::APP_NAME, stock_alert::VERSION);

    match run(&cli) {
        Ok(RunOutcome::Sent(message)) => {
            tracing::info!(to = %message.to, "{}", completion_message(cli.outbox.is_some()));
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::NoAlert) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<AlertError>()
                .map(AlertError::exit_code)
                .unwrap_or(2);
            tracing::error!("{:#}", err);
            ExitCode::from(code as u8)
        }
    }
}
