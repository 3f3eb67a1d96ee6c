use crate::server::service::backoff::{
    next_wait, DEFAULT_LOGIN_WAIT_SECS, MAX_LOGIN_WAIT_SECS,
};
