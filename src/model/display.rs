use std::fmt::{self, Display};

use super::{Model, Summary};

impl Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.intercept.is_sign_negative() { '-' } else { '+' };
        writeln!(
            f,
            "Linear regression: y = {}x {sign} {}",
            self.slope,
            self.intercept.abs()
        )?;

        writeln!(f, "\nCoefficients:")?;
        writeln!(f, "  {:<12}{:>16.6}", "intercept", self.intercept)?;
        writeln!(f, "  {:<12}{:>16.6}", "slope", self.slope)?;

        writeln!(f, "\nSummary:")?;
        match self.summary() {
            Ok(summary) => write_summary(f, &summary),
            Err(e) => writeln!(f, "  unavailable ({e})"),
        }
    }
}

fn write_summary(f: &mut fmt::Formatter<'_>, s: &Summary) -> fmt::Result {
    let counts = [("N", s.n), ("df", s.df), ("mdf", s.mdf), ("rdf", s.rdf)];
    for (name, value) in counts {
        writeln!(f, "  {name:<12}{value:>16}")?;
    }

    let values = [
        ("rss", s.rss),
        ("mss", s.mss),
        ("tss", s.tss),
        ("rsq", s.rsq),
        ("arsq", s.arsq),
        ("variance", s.variance),
        ("stdev", s.stdev),
        ("mvariance", s.mvariance),
        ("mstdev", s.mstdev),
        ("rvariance", s.rvariance),
        ("rstdev", s.rstdev),
        ("fstat", s.fstat),
        ("loglik", s.loglikelihood()),
        ("aic", s.aic()),
        ("bic", s.bic()),
    ];
    for (name, value) in values {
        writeln!(f, "  {name:<12}{value:>16.6}")?;
    }

    match s.aicc() {
        Some(aicc) => writeln!(f, "  {:<12}{aicc:>16.6}", "aicc"),
        None => writeln!(f, "  {:<12}{:>16}", "aicc", "n/a"),
    }
}
