//! Basic usage: lazy training, single prediction and a short horizon

use forecast_facade::prelude::*;

fn main() -> Result<()> {
    let forecaster = ForecasterBuilder::new().seed(42).build()?;
    println!("ready before use: {}", forecaster.is_ready());

    let history = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let next = forecaster.predict_single(&history)?;
    println!("next value: {:.3}", next);

    let week = forecaster.forecast_multi(&history, 7)?;
    println!("7-step forecast: {:?}", week);

    if let Some((slope, intercept)) = forecaster.coefficients()? {
        println!("fitted y = {:.3} * x + {:.3}", slope, intercept);
    }
    Ok(())
}
