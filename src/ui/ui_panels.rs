use anyhow::Result;
use eframe::egui::{ComboBox, DragValue, Grid, RichText, ScrollArea, Spinner, Ui};
use strum::IntoEnumIterator;

use crate::data::{CompanyDetail, DatasetOrigin};
use crate::domain::{Category, Channel, FIELDS, field_label};
use crate::models::{ChartConfig, Filter, RANGE_KEYS, Range};
use crate::ui::styles::{UiStyleExt, colored_subsection_heading};
use crate::ui::{UI_CONFIG, UI_TEXT};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// What the user changed in the controls panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// Rebind a channel; `None` unbinds color/radius
    Bind {
        channel: Channel,
        field: Option<&'static str>,
    },
    ToggleCategory(Category, bool),
    SetOutliers(bool),
    SetRange {
        key: &'static str,
        range: Range,
    },
    ResetFilter,
}

/// Channel bindings, category switches, outlier toggle and range editors.
pub struct ControlsPanel<'a> {
    config: &'a ChartConfig,
    filter: &'a Filter,
    visible: usize,
    total: usize,
    origin: Option<&'a DatasetOrigin>,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(
        config: &'a ChartConfig,
        filter: &'a Filter,
        visible: usize,
        total: usize,
        origin: Option<&'a DatasetOrigin>,
    ) -> Self {
        Self {
            config,
            filter,
            visible,
            total,
            origin,
        }
    }

    fn render_channels(&self, ui: &mut Ui, events: &mut Vec<ControlEvent>) {
        ui.label(colored_subsection_heading(&UI_TEXT.channels_heading));
        Grid::new("channel_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for channel in Channel::iter() {
                    let current = self.config.field(channel);
                    let selected_text = current.map_or(UI_TEXT.label_unbound.as_str(), field_label);

                    ui.label(channel.title());
                    ComboBox::from_id_salt(("channel", channel.to_string()))
                        .selected_text(selected_text)
                        .width(170.0)
                        .show_ui(ui, |ui| {
                            if !channel.is_positional()
                                && ui
                                    .selectable_label(current.is_none(), &UI_TEXT.label_unbound)
                                    .clicked()
                            {
                                events.push(ControlEvent::Bind {
                                    channel,
                                    field: None,
                                });
                            }
                            for spec in FIELDS {
                                let is_selected = current == Some(spec.key);
                                if ui.selectable_label(is_selected, spec.label).clicked()
                                    && !is_selected
                                {
                                    events.push(ControlEvent::Bind {
                                        channel,
                                        field: Some(spec.key),
                                    });
                                }
                            }
                        });
                    ui.end_row();
                }
            });
    }

    fn render_categories(&self, ui: &mut Ui, events: &mut Vec<ControlEvent>) {
        ui.label(colored_subsection_heading(&UI_TEXT.categories_heading));
        ui.horizontal_wrapped(|ui| {
            for category in Category::iter() {
                let mut on = self.filter.categories.contains(&category);
                if ui.checkbox(&mut on, category.title()).changed() {
                    events.push(ControlEvent::ToggleCategory(category, on));
                }
            }
        });

        let mut outliers = self.filter.outliers;
        if ui
            .checkbox(&mut outliers, &UI_TEXT.label_outliers)
            .on_hover_text(&UI_TEXT.outliers_hover)
            .changed()
        {
            events.push(ControlEvent::SetOutliers(outliers));
        }
    }

    fn render_ranges(&self, ui: &mut Ui, events: &mut Vec<ControlEvent>) {
        ui.label(colored_subsection_heading(&UI_TEXT.ranges_heading));
        let mut filter = self.filter.clone();
        Grid::new("range_grid")
            .num_columns(3)
            .spacing([6.0, 4.0])
            .show(ui, |ui| {
                ui.label("");
                ui.label_subdued(&UI_TEXT.label_min);
                ui.label_subdued(&UI_TEXT.label_max);
                ui.end_row();

                for &key in RANGE_KEYS {
                    let Some(range) = filter.range_mut(key) else {
                        continue;
                    };
                    let before = *range;
                    ui.label(field_label(key));
                    ui.add(DragValue::new(&mut range.min).speed(0.1));
                    // yieldGrowthSum is open-ended above
                    if key == "yieldGrowthSum" {
                        ui.label_subdued(&UI_TEXT.label_open_ended);
                    } else {
                        ui.add(DragValue::new(&mut range.max).speed(0.1));
                    }
                    ui.end_row();

                    if *range != before {
                        events.push(ControlEvent::SetRange { key, range: *range });
                    }
                }
            });

        if ui.button(&UI_TEXT.button_reset_filter).clicked() {
            events.push(ControlEvent::ResetFilter);
        }
    }
}

impl Panel for ControlsPanel<'_> {
    type Event = ControlEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<ControlEvent> {
        let mut events = Vec::new();
        ui.heading(&UI_TEXT.controls_heading);
        ui.separator();

        ScrollArea::vertical().show(ui, |ui| {
            self.render_channels(ui, &mut events);
            ui.add_space(10.0);
            self.render_categories(ui, &mut events);
            ui.add_space(10.0);
            self.render_ranges(ui, &mut events);

            ui.add_space(10.0);
            ui.separator();
            ui.metric(
                &UI_TEXT.label_visible,
                &format!("{} / {}", self.visible, self.total),
                UI_CONFIG.colors.heading,
            );
            if let Some(origin) = self.origin {
                ui.metric(&UI_TEXT.label_source, &origin.to_string(), UI_CONFIG.colors.label);
            }
        });
        events
    }
}

/// What the detail panel is showing.
pub enum DetailView<'a> {
    Empty,
    Loading(&'a str),
    Ready(&'a Result<CompanyDetail>),
}

pub struct DetailPanel<'a> {
    view: DetailView<'a>,
}

impl<'a> DetailPanel<'a> {
    pub fn new(view: DetailView<'a>) -> Self {
        Self { view }
    }

    fn render_detail(ui: &mut Ui, detail: &CompanyDetail) {
        ui.label(RichText::new(&detail.ticker).strong().size(18.0));
        if let Some(name) = &detail.name {
            ui.label(name);
        }
        if let Some(industry) = &detail.industry {
            ui.metric(&UI_TEXT.label_industry, industry, UI_CONFIG.colors.label);
        }
        if let Some(category) = detail.category {
            ui.metric(&UI_TEXT.label_category, category.title(), UI_CONFIG.colors.label);
        }
        ui.separator();

        Grid::new("detail_grid")
            .striped(true)
            .num_columns(2)
            .show(ui, |ui| {
                for (label, value) in &detail.rows {
                    ui.label(label);
                    ui.label(format!("{:.2}", value));
                    ui.end_row();
                }
            });
    }
}

impl Panel for DetailPanel<'_> {
    // Read-only
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<()> {
        ui.heading(&UI_TEXT.detail_heading);
        ui.separator();
        match &self.view {
            DetailView::Empty => ui.label_subdued(&UI_TEXT.detail_empty),
            DetailView::Loading(ticker) => {
                ui.horizontal(|ui| {
                    ui.add(Spinner::new());
                    ui.label(format!("{} {}", UI_TEXT.detail_loading, ticker));
                });
            }
            DetailView::Ready(Ok(detail)) => {
                ScrollArea::vertical().show(ui, |ui| Self::render_detail(ui, detail));
            }
            DetailView::Ready(Err(e)) => {
                ui.label_error(&UI_TEXT.detail_failed);
                ui.label_subdued(format!("{:#}", e));
            }
        }
        Vec::new()
    }
}
