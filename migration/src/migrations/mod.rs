pub mod m202510190001_create_organizations;
pub mod m202510190002_create_users;
pub mod m202510190003_create_logger_roles;
pub mod m202510190004_create_loggers;
