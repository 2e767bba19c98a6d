use std::sync::{Arc, Weak};

use tracing::{debug, trace, warn};

use crate::umrouter_core::callback::RouteCallback;
use crate::umrouter_core::types::{CanonicalParams, DefaultParams, Destination};

/// 单条路由的打开配置。
///
/// 描述"这个路由名落到哪个页面"、"完成后通知谁"、
/// "默认带哪些参数"，以及多条候选路由同时命中时用于消歧的权重。
///
/// 注意：
/// - `default_params` 构造时即初始化为空 map，任何时候都不会缺席；
/// - 整体设置默认参数是「合并」而非「替换」，多次设置会累积；
/// - callback 只持有弱引用，生命周期归发起导航的一方管理。
#[derive(Clone, Default)]
pub struct RouteOptions {
    /// 路由最终打开的页面。
    destination: Option<Destination>,

    /// 完成回调（非拥有）。
    callback: Option<Weak<dyn RouteCallback>>,

    /// 默认参数，与每次调用的参数合并后交给页面。
    default_params: DefaultParams,

    /// 消歧权重，比较规则由外部 registry 决定。
    weight: i32,
}

impl RouteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以一份初始参数构造，等价于 `new()` 之后调用一次 [`Self::set_default_params`]。
    pub fn with_default_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut options = Self::new();
        options.set_default_params(params);
        options
    }

    //
    // ========== 默认参数 ==========
    //

    pub fn default_params(&self) -> &DefaultParams {
        &self.default_params
    }

    /// 按 key 取单个默认参数。
    pub fn default_param(&self, key: &str) -> Option<&str> {
        self.default_params.get(key)
    }

    /// 返回内部 map 本身（不是拷贝），通过它的修改直接作用在这条路由上。
    ///
    /// 需要隔离的调用方请自行 clone。
    pub fn default_params_mut(&mut self) -> &mut DefaultParams {
        &mut self.default_params
    }

    /// 合并式设置默认参数：同名 key 被覆盖，其余 key 保留。
    ///
    /// 没有删除语义；传入空 map 为空操作。
    /// 需要表达"可能缺席"的 map 时，传 `option.into_iter().flatten()` 即可。
    pub fn set_default_params<I, K, V>(&mut self, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let overwritten = self.default_params.merge(params);
        if overwritten > 0 {
            trace!(
                destination = ?self.destination,
                overwritten,
                "merged default params over existing keys"
            );
        }
    }

    /// 单个字符串参数的 upsert。
    ///
    /// key 约定非空；传入空 key 仍会写入，但会打一条 warn。
    pub fn put_params(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if key.is_empty() {
            warn!(destination = ?self.destination, "put_params called with empty key");
        }
        if let Some(previous) = self.default_params.insert(key.clone(), value) {
            trace!(key = %key, previous = %previous, "overwrote default param");
        }
    }

    //
    // ========== destination / callback / weight ==========
    //

    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    pub fn set_destination(&mut self, destination: impl Into<Destination>) {
        self.destination = Some(destination.into());
    }

    pub fn clear_destination(&mut self) {
        self.destination = None;
    }

    /// 取回调；持有方已经释放时返回 None。
    pub fn callback(&self) -> Option<Arc<dyn RouteCallback>> {
        self.callback.as_ref().and_then(Weak::upgrade)
    }

    /// 挂上回调，只保存弱引用。
    pub fn set_callback(&mut self, callback: &Arc<dyn RouteCallback>) {
        debug!(callback = callback.name(), "attached route callback");
        self.callback = Some(Arc::downgrade(callback));
    }

    pub fn clear_callback(&mut self) {
        if self.callback.take().is_some() {
            debug!(destination = ?self.destination, "detached route callback");
        }
    }

    /// 是否挂着仍然存活的回调。
    ///
    /// dispatcher 用它决定走回调分支还是打开页面。
    pub fn has_callback(&self) -> bool {
        self.callback
            .as_ref()
            .is_some_and(|callback| callback.strong_count() > 0)
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: i32) {
        self.weight = weight;
    }

    //
    // ========== 链式构造 ==========
    //

    pub fn with_destination(mut self, destination: impl Into<Destination>) -> Self {
        self.set_destination(destination);
        self
    }

    pub fn with_callback(mut self, callback: &Arc<dyn RouteCallback>) -> Self {
        self.set_callback(callback);
        self
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.put_params(key, value);
        self
    }

    /// 计算一次打开页面时的参数视图：
    ///
    /// 先铺默认参数，再用本次调用的参数覆盖。两者都不会被修改。
    pub fn launch_params(&self, invocation: &CanonicalParams) -> CanonicalParams {
        let mut params = CanonicalParams::from(&self.default_params);
        for (key, value) in &invocation.map {
            params.map.insert(key.clone(), value.clone());
        }
        params
    }
}

impl std::fmt::Debug for RouteOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteOptions")
            .field("destination", &self.destination)
            .field("callback", &self.callback().as_deref().map(|c| c.name().to_owned()))
            .field("default_params", &self.default_params)
            .field("weight", &self.weight)
            .finish()
    }
}

impl From<DefaultParams> for RouteOptions {
    fn from(params: DefaultParams) -> Self {
        Self::with_default_params(params)
    }
}
