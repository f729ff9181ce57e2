use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use std::sync::Arc;

/// 存储后端配置
///
/// 两种后端互斥，启动时根据环境变量的存在情况选择其一，
/// 运行期间不再切换：
///
/// - `SUPABASE_ENDPOINT` + `SUPABASE_SECRET_KEY` 同时存在 → REST代理后端
/// - 否则要求 `DATABASE_URL` → 关系型数据库后端
pub enum BackendConfig {
    /// 直接连接PostgreSQL
    Postgres {
        /// postgresql数据库链接字符串
        database_url: String,
    },

    /// 通过托管数据库服务的REST接口访问
    Supabase {
        /// 服务地址，例如 `https://xyz.supabase.co`
        endpoint: String,

        /// 固定API密钥，同时用于apikey头和Bearer认证
        secret_key: String,
    },
}

/// 程序配置
pub struct AppConfig {
    /// HTTP监听端口
    ///
    /// 可通过环境变量 `PORT` 来调整，默认5000
    pub port: u16,

    /// 存储后端配置
    pub backend: BackendConfig,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        dotenvy::dotenv().ok();

        let port = std::env::var("PORT").map_or(5000, |s| s.parse().unwrap_or(5000));

        let backend = select_backend(
            std::env::var("SUPABASE_ENDPOINT").ok(),
            std::env::var("SUPABASE_SECRET_KEY").ok(),
            std::env::var("DATABASE_URL").ok(),
        )?;

        Ok(Arc::new(AppConfig { port, backend }))
    }
}

/// 根据环境变量的存在情况选择存储后端
///
/// 配置缺失时立即返回错误，避免进程在半配置状态下开始提供服务
fn select_backend(
    supabase_endpoint: Option<String>,
    supabase_secret_key: Option<String>,
    database_url: Option<String>,
) -> Result<BackendConfig> {
    if let (Some(endpoint), Some(secret_key)) = (supabase_endpoint, supabase_secret_key) {
        return Ok(BackendConfig::Supabase { endpoint, secret_key });
    }

    let database_url = database_url
        .ok_or(std::env::VarError::NotPresent)
        .context("Can not load DATABASE_URL in environment")
        .suggestion("设置 DATABASE_URL 环境变量，或者同时配置 SUPABASE_ENDPOINT 和 SUPABASE_SECRET_KEY")?;

    Ok(BackendConfig::Postgres { database_url })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_supabase_when_both_variables_present() {
        let backend = select_backend(
            Some("https://xyz.supabase.co".to_string()),
            Some("secret".to_string()),
            Some("postgres://ignored".to_string()),
        )
        .unwrap();

        assert!(matches!(backend, BackendConfig::Supabase { .. }));
    }

    #[test]
    fn falls_back_to_postgres() {
        let backend = select_backend(None, None, Some("postgres://localhost/portfolio".to_string())).unwrap();

        match backend {
            BackendConfig::Postgres { database_url } => {
                assert_eq!(database_url, "postgres://localhost/portfolio");
            }
            _ => panic!("expected postgres backend"),
        }
    }

    #[test]
    fn requires_database_url_when_supabase_incomplete() {
        // 只配置了endpoint没有密钥，不能算Supabase配置
        let result = select_backend(Some("https://xyz.supabase.co".to_string()), None, None);
        assert!(result.is_err());
    }
}
