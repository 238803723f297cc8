//! Prediction handlers.

mod predict_life_expectancy;

pub use predict_life_expectancy::{
    PredictLifeExpectancyCommand, PredictLifeExpectancyHandler, PredictLifeExpectancyResult,
};
