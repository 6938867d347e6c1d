pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod watermark;
    }
}

pub mod modules {
    pub mod work_logs {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod projections;
            pub mod state;
            pub mod work_log;
        }
        pub mod use_cases {
            pub mod log_work_session {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_work_logs {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }

    pub mod profiles {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod profile;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod save_profile {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_profile {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }

    pub mod reporting {
        pub mod core {
            pub mod comparison;
            pub mod earnings;
            pub mod hours;
            pub mod periods;
            pub mod summary;
            pub mod weekday_buckets;
        }
        pub mod use_cases {
            pub mod get_dashboard {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod query;
            }
        }
    }
}

pub mod shell;
