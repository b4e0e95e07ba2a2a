use serde::Serialize;

use crate::calc;

pub const PRICE_MIN: i64 = 25_000;
pub const PRICE_MAX: i64 = 2_500_000;
pub const PRICE_STEP: i64 = 1_000;
pub const DOWN_MAX: i64 = 500_000;
pub const DOWN_STEP: i64 = 1_000;
pub const ZIP_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PurchasePrice,
    DownPayment,
    Term,
    ZipCode,
    Apply,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::PurchasePrice => Field::DownPayment,
            Field::DownPayment => Field::Term,
            Field::Term => Field::ZipCode,
            Field::ZipCode => Field::Apply,
            Field::Apply => Field::PurchasePrice,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::PurchasePrice => Field::Apply,
            Field::DownPayment => Field::PurchasePrice,
            Field::Term => Field::DownPayment,
            Field::ZipCode => Field::Term,
            Field::Apply => Field::ZipCode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Thirty,
    Fifteen,
    Ten,
}

impl Term {
    pub fn years(self) -> u32 {
        match self {
            Term::Thirty => 30,
            Term::Fifteen => 15,
            Term::Ten => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Term::Thirty => "30 year fixed",
            Term::Fifteen => "15 year fixed",
            Term::Ten => "10 year fixed",
        }
    }

    fn next(self) -> Self {
        match self {
            Term::Thirty => Term::Fifteen,
            Term::Fifteen => Term::Ten,
            Term::Ten => Term::Thirty,
        }
    }

    fn prev(self) -> Self {
        match self {
            Term::Thirty => Term::Ten,
            Term::Fifteen => Term::Thirty,
            Term::Ten => Term::Fifteen,
        }
    }
}

/// Everything the Apply Now action would hand to a lender, had it one.
#[derive(Debug, Serialize)]
pub struct ApplicationRequest {
    pub purchase_price: i64,
    pub down_payment: i64,
    pub term_years: u32,
    pub zip_code: String,
    pub monthly_payment: i64,
}

/// The whole form. Every control value lives here, updates go through the
/// methods below, and rendering is a single pass over the current state.
#[derive(Debug, Clone)]
pub struct App {
    pub purchase_price: i64,
    pub down_payment: i64,
    pub term: Term,
    pub zip_code: String,
    pub monthly_payment: i64,
    pub focus: Field,
    pub status: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        let mut app = Self {
            purchase_price: 240_000,
            down_payment: 35_000,
            term: Term::Thirty,
            zip_code: "94115".to_string(),
            monthly_payment: 0,
            focus: Field::PurchasePrice,
            status: None,
        };
        app.recalculate();
        app
    }
}

impl App {
    // Slider minimum tracks 5% of the purchase price.
    pub fn down_payment_min(&self) -> i64 {
        (self.purchase_price / 20).max(0)
    }

    pub fn set_purchase_price(&mut self, value: i64) {
        self.purchase_price = value.clamp(PRICE_MIN, PRICE_MAX);
        let min = self.down_payment_min();
        if self.down_payment < min {
            self.down_payment = min;
        }
        self.recalculate();
    }

    pub fn adjust_purchase_price(&mut self, steps: i64) {
        self.set_purchase_price(self.purchase_price + steps * PRICE_STEP);
    }

    pub fn set_down_payment(&mut self, value: i64) {
        self.down_payment = value.clamp(self.down_payment_min(), DOWN_MAX);
        self.recalculate();
    }

    pub fn adjust_down_payment(&mut self, steps: i64) {
        self.set_down_payment(self.down_payment + steps * DOWN_STEP);
    }

    pub fn cycle_term(&mut self) {
        self.term = self.term.next();
        self.recalculate();
    }

    pub fn cycle_term_back(&mut self) {
        self.term = self.term.prev();
        self.recalculate();
    }

    // Only digits, capped at five characters; everything else is dropped at
    // the keystroke.
    pub fn push_zip(&mut self, c: char) {
        if c.is_ascii_digit() && self.zip_code.len() < ZIP_LEN {
            self.zip_code.push(c);
        }
    }

    pub fn pop_zip(&mut self) {
        self.zip_code.pop();
    }

    pub fn recalculate(&mut self) {
        let principal = (self.purchase_price - self.down_payment) as f64;
        self.monthly_payment =
            calc::monthly_payment(principal, calc::ANNUAL_RATE, self.term.years()).round() as i64;
    }

    pub fn application_request(&self) -> ApplicationRequest {
        ApplicationRequest {
            purchase_price: self.purchase_price,
            down_payment: self.down_payment,
            term_years: self.term.years(),
            zip_code: self.zip_code.clone(),
            monthly_payment: self.monthly_payment,
        }
    }

    /// Placeholder: there is no lender integration behind the button, so the
    /// assembled request only lands in the status line.
    pub fn apply_now(&mut self) {
        match serde_json::to_string(&self.application_request()) {
            Ok(json) => self.status = Some(format!("Apply Now: {json}")),
            Err(err) => self.status = Some(format!("Apply Now failed: {err}")),
        }
    }
}
