use serde_json::Value;

pub const DEFAULT_TITLE: &str = "Untitled Project";
pub const DEFAULT_TAG: &str = "Project";
pub const MAX_BULLETS: usize = 3;
pub const MAX_TECH: usize = 10;

/// `projects.json` 的頂層結構。
///
/// `projects` 缺少或不是陣列時視為空清單，不回報錯誤。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDocument {
    pub projects: Vec<ProjectRecord>,
}

impl ProjectDocument {
    pub fn from_value(value: &Value) -> Self {
        let projects = value
            .get("projects")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(ProjectRecord::from_value).collect())
            .unwrap_or_default();

        Self { projects }
    }
}

/// 單一專案，預設值與截斷在邊界處理一次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: String,
    pub tag: String,
    /// 最多 [`MAX_BULLETS`] 筆
    pub bullets: Vec<String>,
    /// 最多 [`MAX_TECH`] 筆
    pub tech: Vec<String>,
    pub links: ProjectLinks,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectLinks {
    pub github: Option<String>,
    pub demo: Option<String>,
}

impl Default for ProjectRecord {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tag: DEFAULT_TAG.to_string(),
            bullets: Vec::new(),
            tech: Vec::new(),
            links: ProjectLinks::default(),
            image: None,
        }
    }
}

impl ProjectRecord {
    /// 把任意 JSON 值轉成專案，任何欄位都可能缺少或型別不符。
    pub fn from_value(value: &Value) -> Self {
        let links = value.get("links");

        Self {
            title: field_text(value.get("title")).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            tag: field_text(value.get("tag")).unwrap_or_else(|| DEFAULT_TAG.to_string()),
            bullets: text_list(value.get("bullets"), MAX_BULLETS),
            tech: text_list(value.get("tech"), MAX_TECH),
            links: ProjectLinks {
                github: field_text(links.and_then(|l| l.get("github"))),
                demo: field_text(links.and_then(|l| l.get("demo"))),
            },
            image: field_text(value.get("image")),
        }
    }
}

/// 值是否為「空」：null、false、0、空字串
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// 轉成顯示用文字：整數值的浮點數不帶 `.0`，陣列以 `,` 串接，物件固定為 `[object Object]`
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        Value::Null | Value::Bool(_) => value.to_string(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn field_text(value: Option<&Value>) -> Option<String> {
    value.filter(|v| !is_blank(v)).map(value_text)
}

fn text_list(value: Option<&Value>, limit: usize) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().take(limit).map(value_text).collect())
        .unwrap_or_default()
}
