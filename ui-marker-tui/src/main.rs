//! UI Marker TUI
//!
//! 终端版的 UI marker 搜索表单：Application → Module → Function 三级联动选择，
//! 三项齐全后提交，退出时打印导航地址。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与核心服务 (`backend/`)
//!
//! 启动顺序：
//!     加载配置 → 初始化日志 → 创建 tokio 运行时 → 加载应用列表
//!     → init_terminal() → app::run() → restore_terminal() → 打印导航地址

mod app;
mod backend;
mod event;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{ConfigService, CoreService, LocalConfigService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 加载配置（首次运行写出默认配置）
    let config_service = LocalConfigService::from_env();
    let created = !config_service.exists();
    let config = config_service.load_or_create()?;

    // 2. 初始化日志
    logging::init(&config.log_path())?;
    if created {
        tracing::info!("Wrote default config to {}", config_service.path().display());
    } else {
        tracing::info!("Using config {}", config_service.path().display());
    }
    view::theme::set_theme(config.theme);

    // 3. 运行时：控制器在其中派发拉取任务
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    // 4. 连接数据源并加载应用列表（终端初始化前，错误可直接打印）
    let core = runtime.block_on(CoreService::connect(&config))?;

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let mut app = model::App::new(core, runtime.handle().clone());
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;
    result?;

    // 7. 提交成功：打印导航地址
    if let Some(url) = app.navigate_to.take() {
        println!("{url}");
    }
    Ok(())
}
