//! 进程内对象缓存
//!
//! 认证中间件用它缓存 token→用户 的映射，降低每个请求的数据库往返。

pub mod moka;

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::Result;

pub use moka::MokaObjectCache;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

/// 字符串键值对象缓存
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 根据配置构建缓存实例
pub fn create_object_cache() -> Result<Arc<dyn ObjectCache>> {
    Ok(Arc::new(MokaObjectCache::new()?))
}
