
mod unit_models_access_log;
