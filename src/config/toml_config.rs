use crate::utils::error::{PcsError, Result};
use crate::utils::validation::{
    validate_number, validate_string, NumberConstraints, StringConstraints, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// 欄位驗證規則，從 TOML 載入
///
/// ```toml
/// [strings.rider_name]
/// min_length = 1
/// regex = "[A-Za-z\\s-]+"
///
/// [numbers.stage]
/// min = 0
/// max = 21
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldRules {
    #[serde(default)]
    pub strings: BTreeMap<String, StringConstraints>,
    #[serde(default)]
    pub numbers: BTreeMap<String, NumberConstraints<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRule<'a> {
    String(&'a StringConstraints),
    Number(&'a NumberConstraints<f64>),
}

impl FieldRules {
    /// 從 TOML 檔案載入規則
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析規則
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let rules: FieldRules =
            toml::from_str(&processed_content).map_err(|e| PcsError::ConfigError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        if let Some(name) = rules.strings.keys().find(|k| rules.numbers.contains_key(*k)) {
            return Err(PcsError::ConfigError {
                field: name.clone(),
                message: "field is defined as both string and number".to_string(),
            });
        }

        tracing::debug!(
            "Loaded {} string rules and {} number rules",
            rules.strings.len(),
            rules.numbers.len()
        );
        Ok(rules)
    }

    /// 替換環境變數 (例如 ${RIDER_NAME_MAX})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn rule(&self, field: &str) -> Option<FieldRule<'_>> {
        self.strings
            .get(field)
            .map(FieldRule::String)
            .or_else(|| self.numbers.get(field).map(FieldRule::Number))
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.strings
            .keys()
            .chain(self.numbers.keys())
            .map(String::as_str)
            .collect()
    }

    /// 驗證爬取到的原始欄位值；數字欄位先解析為 f64
    pub fn validate_field(&self, field: &str, value: Option<&str>) -> Result<()> {
        let rule = self.rule(field).ok_or_else(|| PcsError::InvalidArgument {
            argument: field.to_string(),
            reason: format!("no rule for field, known fields: {}", self.field_names().join(", ")),
        })?;

        match rule {
            FieldRule::String(constraints) => validate_string(value, constraints),
            FieldRule::Number(constraints) => {
                let number = value
                    .map(|v| {
                        v.trim()
                            .parse::<f64>()
                            .map_err(|_| PcsError::invalid_value(Some(v)))
                    })
                    .transpose()?;
                validate_number(number, constraints)
            }
        }
    }
}

impl Validate for FieldRules {
    fn validate(&self) -> Result<()> {
        for (name, constraints) in &self.strings {
            if constraints.max_length.is_some_and(|max| max < constraints.min_length) {
                return Err(PcsError::ConfigError {
                    field: format!("strings.{}", name),
                    message: "max_length is smaller than min_length".to_string(),
                });
            }
            constraints.compiled_regex().map_err(|e| PcsError::ConfigError {
                field: format!("strings.{}.regex", name),
                message: e.to_string(),
            })?;
        }

        for (name, constraints) in &self.numbers {
            if let (Some(min), Some(max)) = (constraints.min, constraints.max) {
                if max < min {
                    return Err(PcsError::ConfigError {
                        field: format!("numbers.{}", name),
                        message: "max is smaller than min".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
