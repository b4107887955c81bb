//! Fixed text inserted into `worlds.js`.
//!
//! Every template is inserted literally. None of them contain `$`, but the
//! patch steps still avoid regex replacement expansion.

/// `thuis` branch for the `switch(worldType)` in `getOrCreateBackgroundCanvas`.
pub const THUIS_CASE: &str = "        case 'thuis':
            drawThuisBackground(bgCtx);
            break;
";

/// Static walls and floor of the home world, drawn once into the cache.
///
/// Ends with a blank line so the following `function drawNatuurBackground`
/// stays separated from it.
pub const THUIS_BACKGROUND_FN: &str = concat!(
    "// Background drawing function for home world\n",
    "function drawThuisBackground(ctx) {\n",
    "    // Modern home interior background\n",
    "    // Walls - warm gray\n",
    "    ctx.fillStyle = '#E8E0D5';\n",
    "    ctx.fillRect(0, 0, CONFIG.WORLD_WIDTH, CONFIG.WORLD_HEIGHT);\n",
    "    \n",
    "    // Wooden floor\n",
    "    ctx.fillStyle = '#8B6F47';\n",
    "    ctx.fillRect(0, 550, CONFIG.WORLD_WIDTH, CONFIG.WORLD_HEIGHT - 550);\n",
    "    \n",
    "    // Floor boards detail\n",
    "    ctx.strokeStyle = '#6B5637';\n",
    "    ctx.lineWidth = 2;\n",
    "    for (let x = 0; x < CONFIG.WORLD_WIDTH; x += 80) {\n",
    "        ctx.beginPath();\n",
    "        ctx.moveTo(x, 550);\n",
    "        ctx.lineTo(x, CONFIG.WORLD_HEIGHT);\n",
    "        ctx.stroke();\n",
    "    }\n",
    "    \n",
    "    // Draw all static furniture\n",
    "    drawThuisFurniture(ctx);\n",
    "}\n",
    "\n",
);

/// Replacement body for `drawThuis`: blit the cached background canvas.
pub const CACHED_DRAW_THUIS_FN: &str = "function drawThuis(ctx) {
    // Use cached background for home world
    const bgCanvas = getOrCreateBackgroundCanvas('thuis', CONFIG.WORLD_WIDTH, CONFIG.WORLD_HEIGHT);
    ctx.drawImage(bgCanvas, 0, 0);
}";

/// Signature of the function being split up.
pub const DRAW_THUIS_SIGNATURE: &str = "function drawThuis(ctx)";

/// Signature the extracted furniture function is renamed to.
pub const DRAW_THUIS_FURNITURE_SIGNATURE: &str = "function drawThuisFurniture(ctx)";

/// Separator placed between the cached `drawThuis` and the furniture function.
pub const FUNCTION_SEPARATOR: &str = "\n\n";
