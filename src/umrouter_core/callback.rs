use crate::umrouter_core::error::RouteFailure;
use crate::umrouter_core::types::CanonicalParams;

/// 路由完成回调。
///
/// 由发起导航的一方实现并持有，RouteOptions 只保存弱引用。
/// 具体何时调用由外部 dispatcher 决定。
pub trait RouteCallback: Send + Sync {
    /// 页面成功打开，参数为本次打开实际使用的参数。
    fn on_success(&self, params: &CanonicalParams);

    /// 路由未能完成。
    fn on_failure(&self, failure: &RouteFailure);

    /// 可选：返回一个描述性名称，用于调试。
    fn name(&self) -> &str {
        "unnamed_callback"
    }
}

type FailureFn = Box<dyn Fn(&RouteFailure) + Send + Sync>;

/// 用闭包创建 RouteCallback 的便捷结构。
///
/// 未设置失败闭包时，`on_failure` 为空操作。
pub struct FnCallback<F> {
    name: String,
    on_success: F,
    on_failure: Option<FailureFn>,
}

impl<F> FnCallback<F>
where
    F: Fn(&CanonicalParams) + Send + Sync,
{
    pub fn new(name: impl Into<String>, on_success: F) -> Self {
        Self {
            name: name.into(),
            on_success,
            on_failure: None,
        }
    }

    pub fn with_failure<G>(mut self, on_failure: G) -> Self
    where
        G: Fn(&RouteFailure) + Send + Sync + 'static,
    {
        self.on_failure = Some(Box::new(on_failure));
        self
    }
}

impl<F> RouteCallback for FnCallback<F>
where
    F: Fn(&CanonicalParams) + Send + Sync,
{
    fn on_success(&self, params: &CanonicalParams) {
        (self.on_success)(params)
    }

    fn on_failure(&self, failure: &RouteFailure) {
        if let Some(on_failure) = &self.on_failure {
            on_failure(failure);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for FnCallback<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCallback")
            .field("name", &self.name)
            .field("has_failure_handler", &self.on_failure.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn success_closure_receives_params() {
        let seen = std::sync::Arc::new(Mutex::new(None));
        let sink = std::sync::Arc::clone(&seen);
        let callback = FnCallback::new("record", move |params: &CanonicalParams| {
            *sink.lock().unwrap() = params.get_str("id").map(str::to_owned);
        });

        let params: CanonicalParams = [("id", "7")].into_iter().collect();
        callback.on_success(&params);

        assert_eq!(seen.lock().unwrap().as_deref(), Some("7"));
        assert_eq!(callback.name(), "record");
    }

    #[test]
    fn failure_without_handler_is_noop() {
        let callback = FnCallback::new("quiet", |_: &CanonicalParams| {});
        callback.on_failure(&RouteFailure::Aborted {
            reason: "guest".into(),
        });
    }

    #[test]
    fn failure_handler_is_invoked() {
        let failures = std::sync::Arc::new(Mutex::new(Vec::new()));
        let sink = std::sync::Arc::clone(&failures);
        let callback = FnCallback::new("loud", |_: &CanonicalParams| {})
            .with_failure(move |failure| sink.lock().unwrap().push(failure.clone()));

        let failure = RouteFailure::NotFound {
            route: "orders.detail".into(),
        };
        callback.on_failure(&failure);

        assert_eq!(*failures.lock().unwrap(), vec![failure]);
    }
}
