use crate::DEFAULT_API_URL;

/// 客户端配置
///
/// API 地址来自构建时的环境变量，缺省时使用默认值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
}

impl ClientConfig {
    /// 空值或未设置时回退到 [`DEFAULT_API_URL`]
    pub fn new(api_url: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        Self { api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// API 地址的 `scheme://host[:port]` 部分，用于拼接静态资源地址
    pub fn asset_origin(&self) -> &str {
        let url = self.api_url.as_str();
        let host_start = url.find("://").map(|i| i + 3).unwrap_or(0);
        match url[host_start..].find('/') {
            Some(i) => &url[..host_start + i],
            None => url,
        }
    }

    /// 后端返回的图片路径可能是相对路径，也可能已经是完整地址
    pub fn asset_url(&self, path: &str) -> String {
        const ABSOLUTE: [&str; 4] = ["http://", "https://", "data:", "blob:"];
        if ABSOLUTE.iter().any(|scheme| path.starts_with(scheme)) {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.asset_origin(), path)
        } else {
            format!("{}/{}", self.asset_origin(), path)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
