use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 路由最终落地的页面标识。
///
/// 对 RouteOptions 来说这是一个不透明句柄：
/// 具体是哪种页面（Native / RN / Flutter …）、怎么打开，
/// 由外部 dispatcher 根据这个 key 去解释。
///
/// 例如：
/// - "home.index"
/// - "orders.detail"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Destination(pub String);

impl Destination {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Destination {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for Destination {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 路由上预先挂载的默认参数。
///
/// - key 唯一，按 key 有序
/// - 只接受字符串值
/// - [`DefaultParams::merge`] 是「覆盖同名 key、保留其余 key」的合并，
///   不提供删除语义
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefaultParams {
    map: BTreeMap<String, String>,
}

impl DefaultParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 单 key upsert，返回被覆盖的旧值（如果有）。
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.map.insert(key.into(), value.into())
    }

    /// 把 `other` 的每个 key 覆盖进来，`other` 中没有的 key 原样保留。
    ///
    /// 返回被覆盖（已存在且被改写）的 key 数量。
    pub fn merge<I, K, V>(&mut self, other: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut overwritten = 0;
        for (key, value) in other {
            if self.map.insert(key.into(), value.into()).is_some() {
                overwritten += 1;
            }
        }
        overwritten
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|k| k.as_str())
    }

    /// 借出底层有序 map 的只读视图。
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.map
    }
}

impl From<BTreeMap<String, String>> for DefaultParams {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self { map }
    }
}

impl From<DefaultParams> for BTreeMap<String, String> {
    fn from(params: DefaultParams) -> Self {
        params.map
    }
}

impl<K, V> FromIterator<(K, V)> for DefaultParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.merge(iter);
        params
    }
}

impl IntoIterator for DefaultParams {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a> IntoIterator for &'a DefaultParams {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

/// 规范化参数：
///
/// 代表一次打开页面时「默认参数 + 本次调用参数」合并后的统一参数视图。
/// 使用 serde_json::Value 支持复杂的参数结构（数组、嵌套对象等）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalParams {
    pub map: BTreeMap<String, Value>,
}

impl CanonicalParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.map.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// 取字符串参数；非字符串值返回 None。
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.map.get(key).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl From<&DefaultParams> for CanonicalParams {
    fn from(params: &DefaultParams) -> Self {
        Self {
            map: params
                .iter()
                .map(|(k, v)| (k.to_owned(), Value::String(v.to_owned())))
                .collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for CanonicalParams
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
