//! Service generation workflow.
//!
//! The base generation (field service orders for `sale`/`line` tracked
//! products) is supplied by the caller. Extensions register post-generation
//! hooks that run, in registration order, after the base has succeeded.

use std::sync::Arc;

use thiserror::Error;

use fieldservice_auth::AccessContext;

use crate::line::ServiceLine;

/// The base generation step the workflow extends.
pub trait BaseGeneration: Send + Sync {
    type Output;

    fn generate(&self, ctx: &AccessContext, lines: &[ServiceLine]) -> anyhow::Result<Self::Output>;
}

/// Base generation that produces nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopGeneration;

impl BaseGeneration for NoopGeneration {
    type Output = ();

    fn generate(&self, _ctx: &AccessContext, _lines: &[ServiceLine]) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Side-effecting extension run after the base generation.
///
/// Hooks see every line passed to the workflow and pick the ones they handle.
/// They cannot change the base result.
pub trait GenerationHook: Send + Sync {
    /// Stable name used in logs and errors.
    fn name(&self) -> &'static str;

    fn after_generation(&self, ctx: &AccessContext, lines: &[ServiceLine]) -> anyhow::Result<()>;
}

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The base generation failed; no hook ran.
    #[error(transparent)]
    Base(anyhow::Error),

    #[error("post-generation hook '{hook}' failed: {source}")]
    Hook {
        hook: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

pub struct ServiceGenerationWorkflow<B> {
    base: B,
    hooks: Vec<Arc<dyn GenerationHook>>,
}

impl<B> ServiceGenerationWorkflow<B>
where
    B: BaseGeneration,
{
    pub fn new(base: B) -> Self {
        Self {
            base,
            hooks: Vec::new(),
        }
    }

    pub fn with_hook(mut self, hook: Arc<dyn GenerationHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn hook_names(&self) -> Vec<&'static str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    /// Run the base generation, then every hook. Returns the base output as is.
    #[tracing::instrument(name = "service_generation", skip_all, fields(lines = lines.len()))]
    pub fn run(&self, ctx: &AccessContext, lines: &[ServiceLine]) -> Result<B::Output, GenerationError> {
        let output = self
            .base
            .generate(ctx, lines)
            .map_err(GenerationError::Base)?;

        for hook in &self.hooks {
            tracing::debug!(hook = hook.name(), "running post-generation hook");
            hook.after_generation(ctx, lines)
                .map_err(|e| GenerationError::Hook {
                    hook: hook.name(),
                    source: e.into(),
                })?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use fieldservice_auth::Principal;
    use fieldservice_core::CompanyId;
    use fieldservice_products::{Product, ServiceTracking};

    use crate::{SaleLine, SaleOrder};

    fn ctx() -> AccessContext {
        AccessContext::new(Principal::new(CompanyId::new(), vec![]))
    }

    fn lines(n: usize) -> Vec<ServiceLine> {
        let order = SaleOrder::new("S00001", CompanyId::new());
        (0..n)
            .map(|i| {
                let product = Product::new(format!("P{i}"), ServiceTracking::Line);
                let line = SaleLine::new(&order, &product, format!("line {i}"), 1);
                ServiceLine::new(line, order.clone(), product).unwrap()
            })
            .collect()
    }

    struct CountingBase;

    impl BaseGeneration for CountingBase {
        type Output = usize;

        fn generate(&self, _ctx: &AccessContext, lines: &[ServiceLine]) -> anyhow::Result<usize> {
            Ok(lines.len())
        }
    }

    struct FailingBase;

    impl BaseGeneration for FailingBase {
        type Output = ();

        fn generate(&self, _ctx: &AccessContext, _lines: &[ServiceLine]) -> anyhow::Result<()> {
            anyhow::bail!("no field service location on order")
        }
    }

    struct RecordingHook {
        name: &'static str,
        calls: Arc<Mutex<Vec<&'static str>>>,
        fail: bool,
    }

    impl GenerationHook for RecordingHook {
        fn name(&self) -> &'static str {
            self.name
        }

        fn after_generation(&self, _ctx: &AccessContext, _lines: &[ServiceLine]) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push(self.name);
            if self.fail {
                anyhow::bail!("{} exploded", self.name);
            }
            Ok(())
        }
    }

    fn hook(name: &'static str, calls: &Arc<Mutex<Vec<&'static str>>>, fail: bool) -> Arc<dyn GenerationHook> {
        Arc::new(RecordingHook {
            name,
            calls: calls.clone(),
            fail,
        })
    }

    #[test]
    fn base_output_is_returned_unchanged() {
        let workflow = ServiceGenerationWorkflow::new(CountingBase);
        assert_eq!(workflow.run(&ctx(), &lines(3)).unwrap(), 3);
    }

    #[test]
    fn hooks_run_in_registration_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let workflow = ServiceGenerationWorkflow::new(CountingBase)
            .with_hook(hook("first", &calls, false))
            .with_hook(hook("second", &calls, false));

        assert_eq!(workflow.hook_names(), vec!["first", "second"]);
        workflow.run(&ctx(), &lines(1)).unwrap();
        assert_eq!(*calls.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn base_error_is_returned_and_hooks_do_not_run() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let workflow =
            ServiceGenerationWorkflow::new(FailingBase).with_hook(hook("first", &calls, false));

        let err = workflow.run(&ctx(), &lines(1)).unwrap_err();
        match err {
            GenerationError::Base(e) => {
                assert_eq!(e.to_string(), "no field service location on order")
            }
            other => panic!("Expected base error, got {other:?}"),
        }
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn hook_error_stops_the_chain_and_names_the_hook() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let workflow = ServiceGenerationWorkflow::new(NoopGeneration)
            .with_hook(hook("first", &calls, true))
            .with_hook(hook("second", &calls, false));

        let err = workflow.run(&ctx(), &lines(1)).unwrap_err();
        match &err {
            GenerationError::Hook { hook, .. } => assert_eq!(*hook, "first"),
            other => panic!("Expected hook error, got {other:?}"),
        }
        assert!(err.to_string().contains("first exploded"));
        assert_eq!(*calls.lock().unwrap(), vec!["first"]);
    }
}
