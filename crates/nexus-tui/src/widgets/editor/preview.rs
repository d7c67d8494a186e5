//! Preview tab: deploy prompt, build console and the deployed preview

use nexus_app::{AppState, DeploymentState};
use nexus_core::{PerformanceStats, Project};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

pub struct PreviewTab<'a> {
    state: &'a AppState,
    project: &'a Project,
}

impl<'a> PreviewTab<'a> {
    pub fn new(state: &'a AppState, project: &'a Project) -> Self {
        Self { state, project }
    }

    fn render_prompt(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled("Optimize & Deploy", styles::title())),
            Line::from(Span::styled(
                "Deploying runs the Nexus-Optimizer for ultra-low latency and 99+ performance scores.",
                styles::text_secondary(),
            )),
            Line::from(""),
        ];
        if self.state.deployment.is_deploying() {
            lines.push(Line::from(Span::styled(
                "Another deployment is in progress.",
                styles::status_yellow(),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled("[ Enter ]", styles::keybinding()),
                Span::styled(" Deploy Optimized Build", styles::status_green()),
            ]));
        }
        if let Some(url) = self.project.preview_url.as_deref() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Last deployment: {url}"),
                styles::text_muted(),
            )));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }

    fn render_console(&self, logs: &[String], area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_inactive())
            .title(Span::styled(" Engine: Brotli-Edge ", styles::text_muted()))
            .style(Style::default().bg(palette::CONSOLE_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let console = Style::default().fg(palette::CONSOLE_TEXT);
        let mut lines: Vec<Line> = logs
            .iter()
            .map(|l| Line::from(Span::styled(l.as_str(), console)))
            .collect();
        lines.push(Line::from(Span::styled(
            styles::spinner(self.state.spinner_frame),
            console,
        )));
        let overflow = lines.len().saturating_sub(inner.height as usize);
        Paragraph::new(lines)
            .scroll((overflow.min(u16::MAX as usize) as u16, 0))
            .render(inner, buf);
    }

    fn render_deployed(&self, area: Rect, buf: &mut Buffer) {
        let url = self.project.preview_url.as_deref().unwrap_or("");
        let block = styles::glass_block(true).title(Span::styled(format!(" {url} "), styles::accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(self.project.name.as_str(), styles::title())),
            Line::from(Span::styled(
                self.project.description.as_str(),
                styles::text_secondary(),
            )),
            Line::from(""),
            stat_line("Modules", self.project.files.len().to_string()),
        ];
        if let Some(perf) = self.project.performance.as_ref() {
            lines.extend(performance_lines(perf));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Edge Production Ready. Served from the Nexus Edge Network.",
            styles::status_green(),
        )));
        lines.push(Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" redeploy  ", styles::text_muted()),
            Span::styled("r", styles::keybinding()),
            Span::styled(" refresh", styles::text_muted()),
        ]));
        Paragraph::new(lines).render(inner, buf);
    }
}

fn stat_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<14}"), styles::text_muted()),
        Span::styled(value, styles::text_primary()),
    ])
}

fn performance_lines(perf: &PerformanceStats) -> Vec<Line<'static>> {
    vec![
        stat_line("Load Score", format!("{}/100", perf.score)),
        stat_line("Bundle", perf.bundle_size.clone()),
        stat_line("TTFB", perf.ttfb.clone()),
        stat_line("FCP", perf.fcp.clone()),
        stat_line("Optimization", perf.optimization_level.to_string()),
    ]
}

impl Widget for PreviewTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let this_project = self.state.deployment.project_id() == Some(self.project.id.as_str());
        match &self.state.deployment {
            DeploymentState::Deploying { logs, .. } if this_project => {
                self.render_console(logs, area, buf)
            }
            DeploymentState::Deployed { .. } if this_project => self.render_deployed(area, buf),
            // A stored preview outlives the run that produced it
            state if !state.is_deploying() && self.project.preview_url.is_some() => {
                self.render_deployed(area, buf)
            }
            _ => self.render_prompt(area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{editor_state, TestTerminal};
    use nexus_app::{deployment, DeploymentRun};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(PreviewTab::new(state, state.selected_project().unwrap()), area);
        term
    }

    #[test]
    fn test_idle_shows_deploy_prompt() {
        let state = editor_state();
        let term = render(&state);
        assert!(term.buffer_contains("Deploy Optimized Build"));
    }

    fn deployed_project(state: &mut AppState) -> PerformanceStats {
        let performance = deployment::random_performance(&mut rand::thread_rng());
        let project = state
            .selected_project()
            .unwrap()
            .with_deployment(deployment::preview_url("abcdefgh1234"), performance.clone());
        state.projects.update(project);
        performance
    }

    #[test]
    fn test_deploying_shows_logs() {
        let mut state = editor_state();
        let lines = deployment::log_lines(2);
        state.deployment = DeploymentState::Deploying {
            run: DeploymentRun(1),
            project_id: "abcdefgh1234".to_string(),
            logs: vec![deployment::stamp_line(&lines[0])],
        };

        let term = render(&state);
        assert!(term.buffer_contains("Initializing Nexus-Optimizer Engine..."));
        assert!(!term.buffer_contains("Deploy Optimized Build"));
    }

    #[test]
    fn test_other_project_deploying() {
        let mut state = editor_state();
        state.deployment = DeploymentState::Deploying {
            run: DeploymentRun(1),
            project_id: "someone-else".to_string(),
            logs: vec![],
        };

        let term = render(&state);
        assert!(term.buffer_contains("Another deployment is in progress."));
    }

    #[test]
    fn test_deployed_shows_url_and_stats() {
        let mut state = editor_state();
        let performance = deployed_project(&mut state);
        state.deployment = DeploymentState::Deployed {
            project_id: "abcdefgh1234".to_string(),
        };

        let term = render(&state);
        assert!(term.buffer_contains("https://nexus-v1-abcdefgh.preview.nexusai.app"));
        assert!(term.buffer_contains(&format!("{}/100", performance.score)));
        assert!(term.buffer_contains(&performance.bundle_size));
        assert!(term.buffer_contains("Ultra"));
    }

    #[test]
    fn test_stored_preview_shown_after_reopen() {
        let mut state = editor_state();
        let performance = deployed_project(&mut state);
        assert_eq!(state.deployment, DeploymentState::Idle);

        let term = render(&state);
        assert!(term.buffer_contains("https://nexus-v1-abcdefgh.preview.nexusai.app"));
        assert!(term.buffer_contains(&performance.ttfb));
        assert!(!term.buffer_contains("Deploy Optimized Build"));
    }
}
