use color_eyre::Result;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // 加载配置（环境变量 + 可选的.env文件）
    let config = AppConfig::load()?;

    // 创建连接池并执行数据库迁移
    let pool = database::initialize_database(config.clone()).await?;

    // ctrl-c触发优雅关闭
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("🛑 收到退出信号，准备关闭服务...");
            let _ = shutdown_tx.send(true);
        }
    });

    web_service::start_web_service(config, pool, shutdown_rx).await?;

    Ok(())
}
