use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

const PAGE_TEMPLATE_NAME: &str = "seo_page";

pub const PAGE_TITLE: &str = "Army TV Оптимізатор Тексту";
pub const EMPTY_FORM_WARNING: &str = "Будь ласка, введіть текст для оптимізації.";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="uk">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{title}}</title>
<style>
body { font-family: sans-serif; margin: 2rem auto; max-width: 1100px; padding: 0 1rem; }
textarea { width: 100%; box-sizing: border-box; font: inherit; }
button { width: 100%; padding: 0.75rem; font-size: 1.1rem; cursor: pointer; }
.warning { background: #fff4ce; border-left: 4px solid #f0b400; padding: 0.75rem; }
.help { color: #666; font-size: 0.9rem; }
</style>
</head>
<body>
<h1>🤖 ArmyTV. Лейтенант ШІ оптимізує для тебе</h1>
<p>Я допоможу тобі перетворити звичайний опис на інформативний та структурований текст, який буде краще
індексуватися пошуковими системами. Я також згенерую мета-заголовок та мета-опис.</p>

<h2>📝 Вхідні дані</h2>
<form method="post" action="/">
<label for="original_text_input">Вставте сюди оригінальний опис вашого відео:</label>
<textarea id="original_text_input" name="original_text" rows="10">{{input}}</textarea>
{{#if result}}
<input type="hidden" name="previous_result" value="{{result}}">
{{/if}}
<button type="submit">🚀 Оптимізувати текст!</button>
</form>
{{#if warning}}
<p class="warning">{{warning}}</p>
{{/if}}
{{#if result}}
<h2>💡 Лейтенант ШІ оптимізував текст (та додав мета-теги)</h2>
<label for="seo_text_output">Результат (включно з мета-заголовком та мета-описом):</label>
<textarea id="seo_text_output" rows="30" readonly>{{result}}</textarea>
<p class="help">Ви можете скопіювати цей текст. Перевірте наявність Мета-заголовку та Мета-опису на початку.</p>
{{/if}}
<hr>
<p><em>Побудовано з ❤️ для ArmyTV.</em></p>
</body>
</html>
"#;

#[derive(Debug, Default, Serialize)]
pub struct PageView {
    pub title: &'static str,
    pub input: String,
    pub result: Option<String>,
    pub warning: Option<&'static str>,
}

impl PageView {
    pub fn new(input: String) -> Self {
        Self {
            title: PAGE_TITLE,
            input,
            ..Default::default()
        }
    }

    /// An empty result is treated as "nothing to show".
    pub fn with_result(mut self, result: String) -> Self {
        self.result = Some(result).filter(|r| !r.is_empty());
        self
    }

    pub fn with_warning(mut self, warning: &'static str) -> Self {
        self.warning = Some(warning);
        self
    }
}

/// Server-rendered form page. All interpolated values are HTML-escaped.
pub struct SeoPage {
    registry: Handlebars<'static>,
}

impl SeoPage {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { registry })
    }

    pub fn render(&self, view: &PageView) -> Result<String, RenderError> {
        self.registry.render(PAGE_TEMPLATE_NAME, view)
    }
}
