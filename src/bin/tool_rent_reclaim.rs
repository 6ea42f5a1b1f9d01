use base64::Engine;
use rentback::close::CloseTransactionBuilder;
use rentback::config::Config;
use rentback::logger::{ self, LogTag };
use rentback::rpc::RpcClient;
use rentback::scanner::AccountScanner;
use rentback::types::TokenAccountDescriptor;
use rentback::utils::{ lamports_to_sol, reclaimable_rent_lamports, short_id };
use solana_sdk::transaction::Transaction;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    log_header();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let export = args.contains(&"--export".to_string());
    let chunked = args.contains(&"--chunked".to_string());

    let wallet_address = match args.iter().find(|a| !a.starts_with("--")) {
        Some(addr) => addr.clone(),
        None => {
            logger::error(
                LogTag::System,
                "Usage: tool_rent_reclaim <WALLET> [--export] [--chunked] [--verbose]"
            );
            return Err("missing wallet address".into());
        }
    };

    // Environment is read exactly once, here at the boundary
    let config = Config::from_env();
    logger::info(LogTag::Config, &format!("RPC endpoint: {}", config.rpc_url));
    logger::info(LogTag::System, &format!("Wallet: {}", wallet_address));

    // Step 1: Discover empty token accounts
    logger::info(LogTag::Scan, "🔍 Scanning for empty token accounts...");

    let rpc = RpcClient::new(&config);
    let scanner = AccountScanner::new(rpc.clone());

    let empty_accounts = match scanner.scan(&wallet_address).await {
        Ok(accounts) => accounts,
        Err(e) => {
            logger::error(LogTag::Scan, &format!("Scan failed: {}", e));
            return Err(e.into());
        }
    };

    if empty_accounts.is_empty() {
        logger::success(LogTag::Scan, "No empty token accounts found. Nothing to reclaim!");
        return Ok(());
    }

    for (i, account) in empty_accounts.iter().enumerate() {
        logger::info(
            LogTag::Scan,
            &format!(
                "#{}: {} | Mint: {} | Decimals: {} | {}",
                i + 1,
                short_id(&account.account),
                short_id(&account.mint),
                account.decimals,
                if account.is_token_2022 {
                    "Token-2022"
                } else {
                    "SPL Token"
                }
            )
        );
    }

    let rent = reclaimable_rent_lamports(empty_accounts.len());
    logger::info(
        LogTag::Scan,
        &format!(
            "💰 {} empty account(s), ~{:.6} SOL reclaimable",
            empty_accounts.len(),
            lamports_to_sol(rent)
        )
    );

    if !export {
        logger::info(LogTag::System, "Run with --export to emit unsigned close transaction(s)");
        return Ok(());
    }

    // Step 2: Build unsigned close transactions, one batch per token program
    logger::info(LogTag::Build, "🧹 Building unsigned close transaction(s)...");

    let builder = CloseTransactionBuilder::new(rpc);

    let (spl_ids, token_2022_ids) = partition_ids(&empty_accounts);

    let mut transactions = Vec::new();
    for (ids, token_2022) in [
        (spl_ids, false),
        (token_2022_ids, true),
    ] {
        if ids.is_empty() {
            continue;
        }
        if chunked {
            transactions.extend(builder.build_chunked(&wallet_address, &ids, token_2022).await?);
        } else {
            transactions.push(builder.build_for_program(&wallet_address, &ids, token_2022).await?);
        }
    }

    for (i, tx) in transactions.iter().enumerate() {
        logger::success(
            LogTag::Build,
            &format!(
                "Transaction {}/{}: {} instruction(s)",
                i + 1,
                transactions.len(),
                tx.message.instructions.len()
            )
        );
        println!("{}", encode_transaction(tx)?);
    }

    logger::info(
        LogTag::System,
        "Transactions are unsigned. Sign and submit with your wallet of choice."
    );

    Ok(())
}

fn log_header() {
    logger::info(LogTag::System, "rentback - token account rent reclamation");
}

/// Split discovered accounts by owning token program
fn partition_ids(accounts: &[TokenAccountDescriptor]) -> (Vec<String>, Vec<String>) {
    let mut spl = Vec::new();
    let mut token_2022 = Vec::new();
    for account in accounts {
        if account.is_token_2022 {
            token_2022.push(account.account.clone());
        } else {
            spl.push(account.account.clone());
        }
    }
    (spl, token_2022)
}

/// Serialize an unsigned transaction to base64 for external signing
fn encode_transaction(transaction: &Transaction) -> Result<String, Box<dyn std::error::Error>> {
    let serialized = bincode::serialize(transaction)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(serialized))
}
