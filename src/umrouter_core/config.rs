use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::umrouter_core::error::RouteOptionsError;
use crate::umrouter_core::route::RouteOptions;
use crate::umrouter_core::types::Destination;

/// RouteOptions 的声明式配置形态。
///
/// 用于从 JSON 等配置源批量声明路由，或者把已有路由导出给外部持久化。
/// callback 属于运行时对象，不在配置里出现。
///
/// ```json
/// {
///   "destination": "orders.detail",
///   "weight": 10,
///   "default_params": { "from": "push" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteOptionsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(default)]
    pub weight: i32,

    #[serde(default)]
    pub default_params: BTreeMap<String, String>,
}

impl RouteOptionsConfig {
    /// 解析并校验一份 JSON 配置。
    pub fn from_json_str(json: &str) -> Result<Self, RouteOptionsError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, RouteOptionsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// - destination 存在时不能是空白字符串
    /// - 默认参数的 key 不能为空
    pub fn validate(&self) -> Result<(), RouteOptionsError> {
        if self
            .destination
            .as_deref()
            .is_some_and(|destination| destination.trim().is_empty())
        {
            return Err(RouteOptionsError::EmptyDestination);
        }
        if self.default_params.keys().any(String::is_empty) {
            return Err(RouteOptionsError::EmptyParamKey);
        }
        Ok(())
    }
}

impl TryFrom<RouteOptionsConfig> for RouteOptions {
    type Error = RouteOptionsError;

    fn try_from(config: RouteOptionsConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        let mut options =
            RouteOptions::with_default_params(config.default_params).with_weight(config.weight);
        if let Some(destination) = config.destination {
            options.set_destination(Destination(destination));
        }
        Ok(options)
    }
}

impl RouteOptions {
    /// 导出为配置形态（不含 callback）。
    ///
    /// 内存里的 RouteOptions 允许空 key、空白 destination，配置形态不允许；
    /// 这类记录导出时返回与加载时相同的错误，保证导出结果一定能再加载回来。
    pub fn to_config(&self) -> Result<RouteOptionsConfig, RouteOptionsError> {
        let config = RouteOptionsConfig {
            destination: self.destination().map(|d| d.as_str().to_owned()),
            weight: self.weight(),
            default_params: self.default_params().as_map().clone(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = RouteOptionsConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RouteOptionsConfig::default());

        let options = RouteOptions::try_from(config).unwrap();
        assert!(options.destination().is_none());
        assert_eq!(options.weight(), 0);
        assert!(options.default_params().is_empty());
    }

    #[test]
    fn blank_destination_is_rejected() {
        let err = RouteOptionsConfig::from_json_str(r#"{"destination": "  "}"#).unwrap_err();
        assert!(matches!(err, RouteOptionsError::EmptyDestination));
    }

    #[test]
    fn empty_param_key_is_rejected() {
        let err =
            RouteOptionsConfig::from_json_str(r#"{"default_params": {"": "x"}}"#).unwrap_err();
        assert!(matches!(err, RouteOptionsError::EmptyParamKey));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = RouteOptionsConfig::from_json_str(r#"{"callback": "done"}"#).unwrap_err();
        assert!(matches!(err, RouteOptionsError::Parse(_)));
    }

    #[test]
    fn try_from_rejects_invalid_config_built_in_code() {
        let config = RouteOptionsConfig {
            destination: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            RouteOptions::try_from(config),
            Err(RouteOptionsError::EmptyDestination)
        ));
    }

    #[test]
    fn export_skips_missing_destination() {
        let options = RouteOptions::new().with_param("from", "push");
        let json = options.to_config().unwrap().to_json_string().unwrap();
        assert_eq!(json, r#"{"weight":0,"default_params":{"from":"push"}}"#);
    }

    #[test]
    fn export_rejects_empty_param_key() {
        let options = RouteOptions::new().with_param("", "x");
        assert!(matches!(
            options.to_config(),
            Err(RouteOptionsError::EmptyParamKey)
        ));
    }

    #[test]
    fn export_rejects_blank_destination() {
        let options = RouteOptions::new().with_destination("  ");
        assert!(matches!(
            options.to_config(),
            Err(RouteOptionsError::EmptyDestination)
        ));
    }
}
