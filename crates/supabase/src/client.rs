//! Supabase REST客户端
//!
//! 封装PostgREST风格的表级CRUD操作。所有请求都带固定的API密钥，
//! 过滤条件以 `列名=eq.值` 的形式拼接为查询字符串。
//!
//! 失败语义：网络错误或非2xx状态立即返回错误，不做重试与退避，
//! 一次失败的调用会让整个外层请求失败。

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use storage::{StorageError, StorageResult};
use uuid::Uuid;

/// Supabase REST API 客户端
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl SupabaseClient {
    /// 创建新的客户端实例
    ///
    /// `endpoint` 是服务根地址，REST接口固定挂在 `/rest/v1` 下
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            base_url: format!("{}/rest/v1", endpoint.trim_end_matches('/')),
            api_key: api_key.to_string(),
            client: Client::new(),
        }
    }

    /// 当前使用的REST根地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, table);
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// 按过滤条件查询表数据
    ///
    /// filters的key/value原样拼接为查询字符串，
    /// 例如 `("status", "eq.active")`、`("order", "sort_order.asc,created_at.desc")`
    pub async fn get<T: DeserializeOwned>(&self, table: &str, filters: &[(&str, String)]) -> StorageResult<Vec<T>> {
        let response = self.request(Method::GET, table).query(filters).send().await?;
        let response = Self::ensure_success(response).await?;

        Ok(response.json().await?)
    }

    /// 插入一条记录并返回创建后的表示
    ///
    /// `Prefer: return=representation` 让服务端把插入结果返回，
    /// PostgREST会包装成单元素数组
    pub async fn post<T: DeserializeOwned>(&self, table: &str, data: &impl Serialize) -> StorageResult<T> {
        let response = self
            .request(Method::POST, table)
            .header("Prefer", "return=representation")
            .json(data)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        Self::first_or_object(response.json().await?)
    }

    /// 按ID更新一条记录并返回更新后的表示
    pub async fn patch<T: DeserializeOwned>(&self, table: &str, id: Uuid, data: &impl Serialize) -> StorageResult<T> {
        let response = self
            .request(Method::PATCH, table)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(data)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        Self::first_or_object(response.json().await?)
    }

    /// 按ID删除一条记录
    ///
    /// # 返回值
    /// 返回服务端是否应答2xx
    pub async fn delete(&self, table: &str, id: Uuid) -> StorageResult<bool> {
        let response = self
            .request(Method::DELETE, table)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;

        Ok(response.status().is_success())
    }

    async fn ensure_success(response: Response) -> StorageResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        Err(StorageError::Api {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        })
    }

    /// 写操作的响应可能是数组也可能是单个对象，统一取第一个元素
    fn first_or_object<T: DeserializeOwned>(value: serde_json::Value) -> StorageResult<T> {
        let value = match value {
            serde_json::Value::Array(mut items) => {
                if items.is_empty() {
                    return Err(StorageError::decode("服务端返回了空的representation"));
                }
                items.remove(0)
            }
            other => other,
        };

        serde_json::from_value(value).map_err(StorageError::decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn base_url_appends_rest_prefix() {
        let client = SupabaseClient::new("https://xyz.supabase.co", "secret");
        assert_eq!(client.base_url(), "https://xyz.supabase.co/rest/v1");

        // 末尾斜杠不应产生双斜杠
        let client = SupabaseClient::new("https://xyz.supabase.co/", "secret");
        assert_eq!(client.base_url(), "https://xyz.supabase.co/rest/v1");
    }

    #[test]
    fn first_or_object_unwraps_single_element_array() {
        let value = json!([{"answer": 42}]);
        let result: serde_json::Value = SupabaseClient::first_or_object(value).unwrap();
        assert_eq!(result["answer"], 42);
    }

    #[test]
    fn first_or_object_accepts_bare_object() {
        let value = json!({"answer": 42});
        let result: serde_json::Value = SupabaseClient::first_or_object(value).unwrap();
        assert_eq!(result["answer"], 42);
    }

    #[test]
    fn first_or_object_rejects_empty_array() {
        let result: StorageResult<serde_json::Value> = SupabaseClient::first_or_object(json!([]));
        assert!(matches!(result, Err(StorageError::Decode(_))));
    }
}
