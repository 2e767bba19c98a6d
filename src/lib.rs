//! umrouter 的路由配置模型。
//!
//! 一条 [`RouteOptions`] 描述「逻辑路由名最终落到哪个页面」，
//! 以及随之携带的默认参数、完成回调和用于消歧的权重。
//!
//! 路由表、导航执行、deep-link 解析都由外部的 registry / dispatcher 负责，
//! 本 crate 只定义配置对象本身及其合并规则。

mod umrouter_core;

pub use umrouter_core::*;
