mod cache_endpoints;
mod health_check;
