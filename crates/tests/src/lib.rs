#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod session_flow_tests;

#[cfg(test)]
mod insight_tests;

#[cfg(test)]
mod notification_tests;

#[cfg(test)]
mod config_tests;
