use super::plan::DocumentPlan;
use super::spec::{LayoutSpec, Rule};
use super::{Align, Point, Surface, TextRun};
use crate::core::RenderResult;

/// Recorre el plan con la geometría de un backend y emite las primitivas.
pub fn compose<S: Surface + ?Sized>(
    plan: &DocumentPlan,
    spec: &LayoutSpec,
    surface: &mut S,
) -> RenderResult<()> {
    company_header(plan, spec, surface)?;
    title_block(plan, spec, surface)?;
    if let Some(label) = plan.stamp {
        surface.draw_stamp(&spec.stamp, label)?;
    }
    bill_to(plan, spec, surface)?;
    payment(plan, spec, surface)?;
    let description_end = items_table(plan, spec, surface)?;
    totals(plan, spec, description_end, surface)?;
    notes(plan, spec, surface)?;

    let footer = &spec.footer;
    surface.draw_text(&TextRun::new(
        plan.footer.as_str(),
        footer.x,
        footer.y,
        footer.style,
        Align::Center,
    ))
}

fn company_header<S: Surface + ?Sized>(
    plan: &DocumentPlan,
    spec: &LayoutSpec,
    surface: &mut S,
) -> RenderResult<()> {
    let g = &spec.header;
    surface.draw_text(&TextRun::left(plan.company_name.as_str(), g.x, g.top, g.name))?;

    let mut y = g.top + g.lines_gap;
    for line in &plan.company_lines {
        surface.draw_text(&TextRun::left(line.as_str(), g.x, y, g.line))?;
        y += g.line_step;
    }
    Ok(())
}

fn title_block<S: Surface + ?Sized>(
    plan: &DocumentPlan,
    spec: &LayoutSpec,
    surface: &mut S,
) -> RenderResult<()> {
    let g = &spec.title;
    let mut y = g.top;
    surface.draw_text(&TextRun::new(plan.title, g.x, y, g.title, g.align))?;
    y += g.number_gap;
    surface.draw_text(&TextRun::new(plan.number.as_str(), g.x, y, g.number, g.align))?;
    y += g.dates_gap;
    for line in &plan.date_lines {
        surface.draw_text(&TextRun::new(line.as_str(), g.x, y, g.date, g.align))?;
        y += g.date_step;
    }
    Ok(())
}

fn bill_to<S: Surface + ?Sized>(
    plan: &DocumentPlan,
    spec: &LayoutSpec,
    surface: &mut S,
) -> RenderResult<()> {
    let g = &spec.bill_to;
    let mut y = g.top;
    surface.draw_text(&TextRun::left(plan.bill_to_heading, g.x, y, g.heading))?;
    y += g.name_gap;
    surface.draw_text(&TextRun::left(plan.client_name.as_str(), g.x, y, g.name))?;
    y += g.lines_gap;
    for line in &plan.client_lines {
        surface.draw_text(&TextRun::left(line.as_str(), g.x, y, g.line))?;
        y += g.line_step;
    }
    Ok(())
}

fn payment<S: Surface + ?Sized>(
    plan: &DocumentPlan,
    spec: &LayoutSpec,
    surface: &mut S,
) -> RenderResult<()> {
    let g = &spec.payment;
    let mut y = g.top;
    for row in &plan.payment_rows {
        surface.draw_text(&TextRun::left(row.label.as_str(), g.x, y, g.label))?;
        surface.draw_text(&TextRun::left(
            row.value.as_str(),
            g.x + g.value_offset.x,
            y + g.value_offset.y,
            g.value,
        ))?;
        y += g.row_step;
    }
    Ok(())
}

/// Devuelve la coordenada siguiente a la última línea de la descripción.
fn items_table<S: Surface + ?Sized>(
    plan: &DocumentPlan,
    spec: &LayoutSpec,
    surface: &mut S,
) -> RenderResult<f32> {
    let g = &spec.table;
    surface.fill_rect(g.band, g.band_color)?;

    let [description, quantity, price, amount] = plan.table_headers;
    surface.draw_text(&TextRun::left(description, g.description_x, g.header_y, g.header))?;
    surface.draw_text(&TextRun::right(quantity, g.quantity_x, g.header_y, g.header))?;
    surface.draw_text(&TextRun::right(price, g.price_x, g.header_y, g.header))?;
    surface.draw_text(&TextRun::right(amount, g.amount_x, g.header_y, g.header))?;

    let mut y = g.row_y;
    for line in &plan.row.description {
        surface.draw_text(&TextRun::left(line.as_str(), g.description_x, y, g.description))?;
        y += g.description_step;
    }

    let row = &plan.row;
    surface.draw_text(&TextRun::right(row.quantity.as_str(), g.quantity_x, g.row_y, g.cell))?;
    surface.draw_text(&TextRun::right(row.unit_price.as_str(), g.price_x, g.row_y, g.cell))?;
    surface.draw_text(&TextRun::right(row.amount.as_str(), g.amount_x, g.row_y, g.cell))?;

    Ok(y)
}

fn totals<S: Surface + ?Sized>(
    plan: &DocumentPlan,
    spec: &LayoutSpec,
    description_end: f32,
    surface: &mut S,
) -> RenderResult<()> {
    let g = &spec.totals;
    let mut y = match g.gap_after_description {
        Some(gap) => (description_end + gap).max(g.top),
        None => g.top,
    };

    rule(surface, &g.leading_rule, y, g.rule_color)?;
    y += g.rows_gap;

    for line in &plan.totals {
        surface.draw_text(&TextRun::left(line.label.as_str(), g.label_x, y, g.label))?;
        surface.draw_text(&TextRun::right(line.value.as_str(), g.value_x, y, g.value))?;
        y += g.row_step;
    }

    rule(surface, &g.total_rule, y, g.rule_color)?;
    y += g.total_gap;

    let total = &plan.grand_total;
    surface.draw_text(&TextRun::left(total.label.as_str(), g.label_x, y, g.total))?;
    surface.draw_text(&TextRun::right(total.value.as_str(), g.value_x, y, g.total))
}

fn rule<S: Surface + ?Sized>(
    surface: &mut S,
    rule: &Rule,
    y: f32,
    color: super::Rgb,
) -> RenderResult<()> {
    let y = y + rule.offset;
    surface.draw_line(
        Point::new(rule.from_x, y),
        Point::new(rule.to_x, y),
        rule.width,
        color,
    )
}

fn notes<S: Surface + ?Sized>(
    plan: &DocumentPlan,
    spec: &LayoutSpec,
    surface: &mut S,
) -> RenderResult<()> {
    let Some(lines) = &plan.notes else {
        return Ok(());
    };

    let g = &spec.notes;
    surface.draw_text(&TextRun::left("NOTES:", g.x, g.top, g.heading))?;
    let mut y = g.top + g.lines_gap;
    for line in lines {
        surface.draw_text(&TextRun::left(line.as_str(), g.x, y, g.line))?;
        y += g.line_step;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::calculate_totals;
    use crate::layout::plan::tests::sample_model;
    use crate::layout::{Rect, Rgb, StampSpec};

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Recorded {
        Text(TextRun),
        Line(Point, Point),
        Rect(Rect),
        Stamp(String),
    }

    /// Superficie que solo registra las llamadas.
    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub calls: Vec<Recorded>,
    }

    impl RecordingSurface {
        pub fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Recorded::Text(run) => Some(run.text.as_str()),
                    Recorded::Stamp(label) => Some(label.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn run(&self, text: &str) -> Option<&TextRun> {
            self.calls.iter().find_map(|call| match call {
                Recorded::Text(run) if run.text == text => Some(run),
                _ => None,
            })
        }
    }

    impl Surface for RecordingSurface {
        fn draw_text(&mut self, run: &TextRun) -> RenderResult<()> {
            self.calls.push(Recorded::Text(run.clone()));
            Ok(())
        }

        fn draw_line(&mut self, from: Point, to: Point, _width: f32, _color: Rgb) -> RenderResult<()> {
            self.calls.push(Recorded::Line(from, to));
            Ok(())
        }

        fn fill_rect(&mut self, rect: Rect, _color: Rgb) -> RenderResult<()> {
            self.calls.push(Recorded::Rect(rect));
            Ok(())
        }

        fn draw_stamp(&mut self, _stamp: &StampSpec, label: &str) -> RenderResult<()> {
            self.calls.push(Recorded::Stamp(label.to_string()));
            Ok(())
        }
    }

    fn record(model: &crate::models::RenderModel, spec: &LayoutSpec) -> RecordingSurface {
        let plan = DocumentPlan::build(model, &spec.limits);
        let mut surface = RecordingSurface::default();
        compose(&plan, spec, &mut surface).unwrap();
        surface
    }

    #[test]
    fn both_backends_draw_the_same_texts_in_the_same_order() {
        let mut model = sample_model();
        model.paid = true;
        let vector = record(&model, &LayoutSpec::vector());
        let raster = record(&model, &LayoutSpec::raster());
        assert_eq!(vector.texts(), raster.texts());

        let plan = DocumentPlan::build(&model, &LayoutSpec::vector().limits);
        let drawn: Vec<String> = vector.texts().iter().map(|t| t.to_string()).collect();
        assert_eq!(drawn, plan.texts());
    }

    #[test]
    fn conditional_sections_follow_the_model() {
        let mut model = sample_model();
        model.notes.clear();
        model.totals = calculate_totals(&"1".into(), &"10".into(), &"0".into(), &"0".into());

        for spec in [LayoutSpec::vector(), LayoutSpec::raster()] {
            let surface = record(&model, &spec);
            let texts = surface.texts();
            assert!(!texts.iter().any(|t| t.starts_with("Discount")));
            assert!(!texts.iter().any(|t| t.starts_with("Tax (")));
            assert!(!texts.contains(&"NOTES:"));
            assert!(!texts.contains(&"PAID"));
            assert!(texts.contains(&"Subtotal:"));
            assert!(texts.contains(&"Total:"));
        }
    }

    #[test]
    fn money_values_are_right_aligned_on_the_value_column() {
        let spec = LayoutSpec::vector();
        let surface = record(&sample_model(), &spec);
        let total = surface.run("USD 209.00").unwrap();
        assert_eq!(total.align, Align::Right);
        assert_eq!(total.x, spec.totals.value_x);
        assert_eq!(total.style, spec.totals.total);
    }

    #[test]
    fn raster_totals_move_below_long_descriptions() {
        let spec = LayoutSpec::raster();
        let surface = record(&sample_model(), &spec);
        let subtotal = surface.run("Subtotal:").unwrap();
        assert_eq!(subtotal.y, spec.totals.top + spec.totals.rows_gap);

        let vector = LayoutSpec::vector();
        let surface = record(&sample_model(), &vector);
        assert_eq!(surface.run("Subtotal:").unwrap().y, vector.totals.top);
    }

    #[test]
    fn table_band_and_rules_are_drawn() {
        let spec = LayoutSpec::vector();
        let surface = record(&sample_model(), &spec);
        let rects = surface.calls.iter().filter(|c| matches!(c, Recorded::Rect(_))).count();
        let lines = surface.calls.iter().filter(|c| matches!(c, Recorded::Line(..))).count();
        assert_eq!(rects, 1);
        assert_eq!(lines, 2);
    }
}
