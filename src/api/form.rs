use chrono::{Duration, NaiveDate};
use minijinja::{context, Environment};

const FORM_TEMPLATE: &str = "invoice_form.html";
const FORM_SOURCE: &str = include_str!("../../templates/invoice_form.html");

/// Días entre la fecha de emisión y la de vencimiento que propone el formulario.
const DEFAULT_DUE_DAYS: i64 = 30;

/// Página HTML del formulario de facturas.
pub struct FormPage {
    env: Environment<'static>,
}

impl FormPage {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(FORM_TEMPLATE, FORM_SOURCE)?;
        Ok(FormPage { env })
    }

    /// Renderiza el formulario con la fecha de hoy y el vencimiento a 30 días.
    pub fn render(&self, today: NaiveDate) -> Result<String, minijinja::Error> {
        let due = today + Duration::days(DEFAULT_DUE_DAYS);
        self.env.get_template(FORM_TEMPLATE)?.render(context! {
            invoice_date => today.format("%Y-%m-%d").to_string(),
            due_date => due.format("%Y-%m-%d").to_string(),
        })
    }
}
