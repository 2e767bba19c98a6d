use thiserror::Error;

use crate::umrouter_core::types::Destination;

/// 路由未能完成时交给 [`RouteCallback::on_failure`](super::RouteCallback::on_failure) 的原因。
///
/// 由外部 dispatcher 构造，RouteOptions 本身从不产生。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteFailure {
    /// 路由表里找不到对应的路由。
    #[error("no route found for `{route}`")]
    NotFound { route: String },

    /// 被中间件或业务逻辑中止。
    #[error("navigation aborted: {reason}")]
    Aborted { reason: String },

    /// 目标页面当前无法打开（未注册到 runtime、已下线等）。
    #[error("destination `{destination}` is unavailable")]
    DestinationUnavailable { destination: Destination },
}

/// 声明式配置 -> RouteOptions 过程中的错误。
#[derive(Error, Debug)]
pub enum RouteOptionsError {
    /// destination 存在但为空白字符串。
    #[error("destination must not be blank")]
    EmptyDestination,

    /// 默认参数里出现了空 key。
    #[error("default param key must not be empty")]
    EmptyParamKey,

    /// 配置 JSON 解析失败。
    #[error("failed to parse route options config: {0}")]
    Parse(#[from] serde_json::Error),
}
