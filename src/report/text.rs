use crate::model::Regressor;
use crate::pipeline::stage2_train::TrainedModel;
use crate::report::{PROGRESS_WIDTH, ReportData, format_f64_6, format_score, progress_bar};

pub fn render_report_text(data: &ReportData<'_>) -> String {
    let mut out = String::new();

    out.push_str("ctDNA-Based Resistance Simulator\n");
    out.push_str("================================\n\n");

    out.push_str("1. Patient profile & biomarkers\n");
    out.push_str(&format!("RAS status: {}\n", data.input.ras.label()));
    out.push_str(&format!("MSI status: {}\n", data.input.msi.label()));
    out.push_str(&format!(
        "NOL3 expression: {}\n",
        format_score(data.input.nol3)
    ));
    out.push_str(&format!(
        "ctDNA baseline (copy/mL): {}\n",
        data.input.ct_baseline
    ));
    out.push_str(&format!(
        "ctDNA month 3 (copy/mL): {}\n\n",
        data.input.ct_month3
    ));

    out.push_str("2. Model features\n");
    for &field in data.feature_order.fields() {
        out.push_str(&format!(
            "{}: {}\n",
            field.name(),
            format_f64_6(data.prediction.features.value(field))
        ));
    }
    out.push('\n');

    out.push_str("3. Resistance prediction\n");
    out.push_str(&format!(
        "Resistance score: {}\n",
        format_score(data.prediction.resistance_score)
    ));
    out.push_str(&format!(
        "{} {}\n",
        progress_bar(data.prediction.progress(), PROGRESS_WIDTH),
        format_score(data.prediction.progress())
    ));
    out.push_str(
        "A higher score suggests a higher risk of early resistant-clone emergence.\n\n",
    );

    out.push_str("4. Predicted tumor burden (ctDNA)\n");
    out.push_str("month\tburden\n");
    for point in &data.trend.points {
        out.push_str(&format!("{}\t{}\n", point.month, format_score(point.burden)));
    }

    out
}

pub fn render_model_text(model: &TrainedModel) -> String {
    let profile = model.profile();
    let forest = model.forest();
    let mut out = String::new();

    out.push_str("Synthetic resistance model\n");
    out.push_str("==========================\n\n");
    out.push_str(&format!("Seed: {}\n", profile.seed));
    out.push_str(&format!(
        "Training rows: {}\n",
        model.n_training_rows()
    ));
    out.push_str(&format!(
        "Label: {:.1}*ras + {:.1}*nol3 + {:.1}*(1 - ct_trend)\n",
        profile.label.ras, profile.label.nol3, profile.label.ct_response
    ));
    out.push_str(&format!(
        "Field order: {}\n",
        model.feature_order().names().join(", ")
    ));
    out.push_str(&format!("Trees: {}\n", forest.n_trees()));
    out.push_str(&format!("Features per split: {}\n", forest.n_features()));
    out.push_str(&format!(
        "Max depth: {}\n",
        profile
            .max_depth
            .map_or_else(|| "unbounded".to_string(), |d| d.to_string())
    ));
    out.push_str(&format!(
        "Min samples split/leaf: {}/{}\n",
        profile.min_samples_split, profile.min_samples_leaf
    ));
    let [k6, k9, k12] = profile.trend_multipliers;
    out.push_str(&format!(
        "Trend multipliers (months 6/9/12): {}/{}/{}\n",
        k6, k9, k12
    ));

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
