//! 运行时配置
//!
//! API 地址在编译期通过 `BUSBOOK_API_URL` 环境变量注入，未设置时使用默认地址。

use busbook_shared::ClientConfig;
use std::sync::OnceLock;

/// 全局客户端配置
pub fn app_config() -> &'static ClientConfig {
    static CONFIG: OnceLock<ClientConfig> = OnceLock::new();
    CONFIG.get_or_init(|| ClientConfig::new(option_env!("BUSBOOK_API_URL")))
}
