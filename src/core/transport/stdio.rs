//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and recommended mode.

use rmcp::{RoleServer, ServiceExt, transport::IntoTransport};
use tracing::info;

use super::service::ShutdownSignal;
use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport.
    pub async fn run(server: McpServer, shutdown: ShutdownSignal) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");
        Self::serve_until(server, rmcp::transport::stdio(), shutdown).await
    }

    /// Serve one MCP session over `transport` until the client hangs up or
    /// `shutdown` resolves, whichever comes first.
    ///
    /// The shutdown race covers the initialize handshake too.
    async fn serve_until<T, E, A>(
        server: McpServer,
        transport: T,
        shutdown: ShutdownSignal,
    ) -> TransportResult<()>
    where
        T: IntoTransport<RoleServer, E, A>,
        E: std::error::Error + Send + Sync + 'static,
    {
        let session = async move {
            let service = server
                .serve(transport)
                .await
                .map_err(|e| TransportError::init(e.to_string()))?;

            service
                .waiting()
                .await
                .map_err(|e| TransportError::service(e.to_string()))?;
            info!("STDIO transport finished");
            Ok(())
        };

        tokio::select! {
            result = session => result,
            () = shutdown => {
                // Dropping the running service cancels it.
                info!("Shutdown requested, closing STDIO transport");
                Ok(())
            }
        }
    }
}
