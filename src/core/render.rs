use crate::core::escape::escape_html;
use crate::domain::model::ProjectRecord;

pub const NO_PROJECTS_HTML: &str = r#"<p class="muted">No projects found yet.</p>"#;
pub const NO_DESCRIPTION_HTML: &str = r#"<p class="muted">No description yet.</p>"#;

/// 產生單張卡片的 HTML。所有欄位在插入前都經過 [`escape_html`]。
pub fn render_card(project: &ProjectRecord) -> String {
    let title = escape_html(&project.title);
    let tag = escape_html(&project.tag);

    let image_html = project
        .image
        .as_deref()
        .map(|image| {
            format!(
                r#"<img class="project-img" src="{}" alt="{} screenshot" loading="lazy">"#,
                escape_html(image),
                title
            )
        })
        .unwrap_or_default();

    let bullets_html = if project.bullets.is_empty() {
        NO_DESCRIPTION_HTML.to_string()
    } else {
        let items: String = project
            .bullets
            .iter()
            .map(|bullet| format!("<li>{}</li>", escape_html(bullet)))
            .collect();
        format!("<ul>{}</ul>", items)
    };

    let tech_html = if project.tech.is_empty() {
        String::new()
    } else {
        let tech = project
            .tech
            .iter()
            .map(|t| escape_html(t))
            .collect::<Vec<_>>()
            .join(", ");
        format!(r#"<p class="tech"><strong>Tech:</strong> {}</p>"#, tech)
    };

    let demo_html = action_link(project.links.demo.as_deref(), "btn small", "Demo");
    let github_html = action_link(project.links.github.as_deref(), "btn small ghost", "GitHub");

    format!(
        r#"
    <article class="card">
      <div class="card-head">
        <h3>{title}</h3>
        <span class="pill">{tag}</span>
      </div>
      {image_html}
      {bullets_html}
      {tech_html}
      <div class="card-actions">
        {demo_html}
        {github_html}
      </div>
    </article>
  "#
    )
}

/// 依序渲染並串接，空清單回傳提示訊息
pub fn render_cards(projects: &[ProjectRecord]) -> String {
    if projects.is_empty() {
        return NO_PROJECTS_HTML.to_string();
    }
    projects.iter().map(render_card).collect()
}

fn action_link(url: Option<&str>, class: &str, label: &str) -> String {
    match url {
        Some(url) => format!(
            r#"<a class="{}" href="{}" target="_blank" rel="noopener">{}</a>"#,
            class,
            escape_html(url),
            label
        ),
        None => String::new(),
    }
}
